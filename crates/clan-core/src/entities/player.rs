//! Player entity - a user account inside one game

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Player entity
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    /// Public id of the owning game
    pub game_id: String,
    pub public_id: String,
    pub name: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a new, not yet persisted Player
    pub fn new(game_id: String, public_id: String, name: String, metadata: Value) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            game_id,
            public_id,
            name,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update display name and metadata
    pub fn update(&mut self, name: String, metadata: Value) {
        self.name = name;
        self.metadata = metadata;
        self.updated_at = Utc::now();
    }
}
