use pretty_assertions::assert_eq;
use report::order::display_order;

#[test]
fn ignores_case() {
    let result = display_order(&["Carl", "bob", "Alice", "dave"]);

    assert_eq!(vec!["Alice", "bob", "Carl", "dave"], result);
}

#[test]
fn case_only_differences_keep_input_order() {
    let result = display_order(&["Bob", "alice", "bob", "BOB"]);

    assert_eq!(vec!["alice", "Bob", "bob", "BOB"], result);
}

#[test]
fn empty() {
    let result = display_order::<&str>(&[]);

    assert!(result.is_empty());
}
