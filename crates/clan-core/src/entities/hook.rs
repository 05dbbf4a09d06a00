//! Hook entity - a webhook endpoint subscribed to one event type of one game

use chrono::{DateTime, Utc};

use crate::value_objects::HookEventType;

/// Hook entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    pub id: i64,
    /// Public id of the owning game
    pub game_id: String,
    pub public_id: String,
    pub event_type: HookEventType,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hook {
    /// Create a new, not yet persisted Hook
    pub fn new(game_id: String, public_id: String, event_type: HookEventType, url: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            game_id,
            public_id,
            event_type,
            url,
            created_at: now,
            updated_at: now,
        }
    }
}
