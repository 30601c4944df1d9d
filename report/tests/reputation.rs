use pretty_assertions::assert_eq;
use report::reputation;
use serde_json::json;
use tracing_test::traced_test;

#[test]
fn full_record() {
    let input = json!({
        "type": "success",
        "data": {
            "personaId": 987654321,
            "cheatscore": 15,
            "bf4db_url": "http://bf4db.com/players/987654321",
        }
    });

    let result = reputation::parse(&input);

    let expected = common::ReputationRecord {
        persona_id: Some("987654321".to_owned()),
        cheat_score: Some(15.0),
        profile_url: Some("http://bf4db.com/players/987654321".to_owned()),
    };
    assert_eq!(Some(expected), result);
}

#[test]
fn quoted_numbers() {
    let input = json!({ "data": { "personaId": "42", "cheatscore": "9.5" } });

    let result = reputation::parse(&input).unwrap();

    assert_eq!(Some("42"), result.persona_id.as_deref());
    assert_eq!(Some(9.5), result.cheat_score);
    assert_eq!(None, result.profile_url);
    assert!(!result.is_flagged());
}

#[test]
fn record_without_score() {
    let input = json!({ "data": { "personaId": "42" } });

    let result = reputation::parse(&input).unwrap();

    assert_eq!(None, result.cheat_score);
    assert!(!result.is_flagged());
}

#[test]
#[traced_test]
fn no_data() {
    let inputs = [
        json!({ "type": "error", "message": "player not found" }),
        json!({ "data": null }),
        json!({ "data": "not found" }),
        json!({ "data": [] }),
        json!([]),
        json!(null),
    ];

    for input in inputs {
        assert_eq!(None, reputation::parse(&input), "{}", input);
    }
}

#[test]
#[traced_test]
fn wrong_field_types() {
    let input = json!({ "data": { "personaId": "42", "cheatscore": { "value": 3 } } });

    assert_eq!(None, reputation::parse(&input));
    assert!(logs_contain("Unexpected reputation record"));
}
