//! Connections entities - Puzzle payloads from the Connections API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::GameId;

/// A hidden theme shared by four words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub hint: String,
    pub words: Vec<String>,
}

/// A daily puzzle, keyed by category description
///
/// A `202 Accepted` body may not carry categories yet, so they default to
/// an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionsGame {
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
}

impl ConnectionsGame {
    /// Total number of words across all categories
    pub fn word_count(&self) -> usize {
        self.categories.values().map(|c| c.words.len()).sum()
    }
}

/// A category the player has found (or had revealed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedCategory {
    pub description: String,
    pub words: Vec<String>,
}

/// Response of `GET /games` on the Connections API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameIdsResponse {
    pub game_ids: Vec<GameId>,
}
