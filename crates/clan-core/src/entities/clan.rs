//! Clan entity - a player-owned group inside a game

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Clan entity
#[derive(Debug, Clone, PartialEq)]
pub struct Clan {
    pub id: i64,
    /// Public id of the owning game
    pub game_id: String,
    pub public_id: String,
    pub name: String,
    /// Internal id of the owning player
    pub owner_id: i64,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Clan {
    /// Create a new, not yet persisted Clan
    pub fn new(
        game_id: String,
        public_id: String,
        name: String,
        owner_id: i64,
        metadata: Value,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            game_id,
            public_id,
            name,
            owner_id,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a player is the clan owner
    #[inline]
    pub fn is_owner(&self, player_id: i64) -> bool {
        self.owner_id == player_id
    }

    /// Update name and metadata
    pub fn update(&mut self, name: String, metadata: Value) {
        self.name = name;
        self.metadata = metadata;
        self.updated_at = Utc::now();
    }
}
