//! Player registry built once from the replay's player list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Player identifier, stable for the lifetime of a replay.
pub type PlayerId = u32;

/// Match result string that marks a winning team.
pub const WIN_RESULT: &str = "Win";

/// A participant in the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player id as used by events.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Faction (race) played.
    pub faction: String,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, faction: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            faction: faction.into(),
        }
    }
}

/// A team and its recorded result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Team {
    /// Result string such as `"Win"` or `"Loss"`, if recorded.
    #[serde(default)]
    pub result: Option<String>,
    /// Members of the team, by player id.
    pub players: Vec<PlayerId>,
}

impl Team {
    /// Whether this team won.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.result.as_deref() == Some(WIN_RESULT)
    }
}

/// Read-only id to name lookup.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    names: HashMap<PlayerId, String>,
}

impl PlayerRegistry {
    /// Build the registry from a player list. Later duplicates of an id win.
    #[must_use]
    pub fn from_players(players: &[Player]) -> Self {
        Self {
            names: players
                .iter()
                .map(|p| (p.id, p.name.clone()))
                .collect(),
        }
    }

    /// Display name for `id`, if known.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Display name for an optional id, falling back to `"Unknown"`.
    #[must_use]
    pub fn name_or_unknown(&self, id: Option<PlayerId>) -> &str {
        id.and_then(|id| self.name_of(id)).unwrap_or("Unknown")
    }

    /// Display name for series labels, falling back to `"Player {id}"`.
    #[must_use]
    pub fn label_for(&self, id: PlayerId) -> String {
        self.name_of(id)
            .map_or_else(|| format!("Player {id}"), str::to_string)
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
