use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "personaId", default)]
    persona_id: Option<Scalar>,
    #[serde(default)]
    cheatscore: Option<Scalar>,
    #[serde(default)]
    bf4db_url: Option<String>,
}

/// The API is not consistent about quoting numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(t) => t,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(t) => t.trim().parse().ok(),
        }
    }
}

/// Interprets a response of the reputation API.
///
/// Anything that does not carry a record object under `data` is treated as "no data"
/// for the player, rather than as an error.
pub fn parse(value: &serde_json::Value) -> Option<common::ReputationRecord> {
    let response = match Response::deserialize(value) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Unexpected reputation response: {:?}", e);
            return None;
        }
    };

    let data = response.data.filter(|d| d.is_object())?;
    let raw = match RawRecord::deserialize(&data) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Unexpected reputation record: {:?}", e);
            return None;
        }
    };

    Some(common::ReputationRecord {
        cheat_score: raw.cheatscore.as_ref().and_then(Scalar::as_f64),
        persona_id: raw.persona_id.map(Scalar::into_text),
        profile_url: raw.bf4db_url.filter(|u| !u.is_empty()),
    })
}
