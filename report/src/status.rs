use serde::Deserialize;

/// Slot group holding the regular (non-spectator, non-commander) player slots
pub const PLAYER_SLOT_GROUP: &str = "2";

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Unexpected server status shape: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Unknown map identifier {0:?}")]
    UnknownMap(String),
    #[error("Unknown mode identifier {0:?}")]
    UnknownMode(String),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(rename = "SERVER_INFO")]
    server_info: ServerInfo,
    #[serde(rename = "SERVER_PLAYERS")]
    server_players: Vec<ServerPlayer>,
}

#[derive(Debug, Deserialize)]
struct ServerInfo {
    map: String,
    #[serde(rename = "mapMode")]
    map_mode: ModeId,
    /// Only the player group has to report its occupancy, the others are left alone
    slots: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ServerPlayer {
    persona: Persona,
}

#[derive(Debug, Deserialize)]
struct Persona {
    user: User,
}

#[derive(Debug, Deserialize)]
struct User {
    username: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModeId {
    Text(String),
    Number(u64),
}

impl ModeId {
    fn into_key(self) -> String {
        match self {
            Self::Text(t) => t,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Extracts the status of the server from the JSON returned by the server browser.
///
/// The identifiers for map and mode have to be known, otherwise this fails instead of
/// guessing a name.
#[tracing::instrument(skip(value))]
pub fn parse(value: &serde_json::Value) -> Result<common::ServerStatus, StatusError> {
    let envelope = Envelope::deserialize(value)?;
    let Message {
        server_info,
        server_players,
    } = envelope.message;

    let player_count = server_info
        .slots
        .get(PLAYER_SLOT_GROUP)
        .and_then(|s| s.get("current"))
        .and_then(serde_json::Value::as_u64)
        .ok_or(StatusError::MissingField("message.SERVER_INFO.slots.2"))?;

    let map_id = server_info.map;
    let mode_id = server_info.map_mode.into_key();

    let map_name = crate::names::map_name(&map_id)
        .ok_or_else(|| StatusError::UnknownMap(map_id.clone()))?;
    let mode_name = crate::names::mode_name(&mode_id)
        .ok_or_else(|| StatusError::UnknownMode(mode_id.clone()))?;

    let player_names: Vec<String> = server_players
        .into_iter()
        .map(|p| p.persona.user.username)
        .collect();

    tracing::debug!("Player count: {}", player_count);

    Ok(common::ServerStatus {
        player_names,
        player_count,
        map_id,
        mode_id,
        map_name: map_name.to_owned(),
        mode_name: mode_name.to_owned(),
    })
}
