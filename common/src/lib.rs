#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServerStatus {
    pub player_names: Vec<String>,
    pub player_count: u64,
    pub map_id: String,
    pub mode_id: String,
    pub map_name: String,
    pub mode_name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReputationRecord {
    pub persona_id: Option<String>,
    pub cheat_score: Option<f64>,
    pub profile_url: Option<String>,
}

impl ReputationRecord {
    pub const FLAG_THRESHOLD: f64 = 10.0;

    /// Whether the score should be highlighted on the status page
    pub fn is_flagged(&self) -> bool {
        self.cheat_score
            .map(|score| score >= Self::FLAG_THRESHOLD)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub reputation: Option<ReputationRecord>,
}

/// Players in display order, each with the reputation data found for them (if any).
///
/// Entries keep their insertion order, the enricher inserts them already sorted. A name is
/// only ever listed once.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerReport {
    entries: Vec<PlayerEntry>,
}

impl PlayerReport {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds the player, or replaces the data of a player with the same name in place
    pub fn insert<N>(&mut self, name: N, reputation: Option<ReputationRecord>)
    where
        N: Into<String>,
    {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.reputation = reputation,
            None => self.entries.push(PlayerEntry { name, reputation }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&PlayerEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn with_data(&self) -> usize {
        self.entries.iter().filter(|e| e.reputation.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
