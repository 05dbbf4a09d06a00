//! Game entity - the tenant that owns players, clans and membership rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// Membership configuration of a game
///
/// Every threshold is a plain integer level. Acceptance thresholds are
/// compared with `>=`; the promotion/demotion values are offsets between
/// the requestor's level and the target's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub min_membership_level: i32,
    pub max_membership_level: i32,
    pub min_level_to_accept_application: i32,
    pub min_level_to_create_invitation: i32,
    pub min_level_offset_to_promote_member: i32,
    pub min_level_offset_to_demote_member: i32,
    pub allow_application: bool,
}

impl GameSettings {
    /// Check the level bounds are coherent
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min_membership_level > self.max_membership_level {
            return Err(DomainError::ValidationError(format!(
                "min membership level ({}) is greater than max membership level ({})",
                self.min_membership_level, self.max_membership_level
            )));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_membership_level: 1,
            max_membership_level: 10,
            min_level_to_accept_application: 5,
            min_level_to_create_invitation: 5,
            min_level_offset_to_promote_member: 1,
            min_level_offset_to_demote_member: 1,
            allow_application: true,
        }
    }
}

/// Game entity
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Store-assigned id (0 until persisted)
    pub id: i64,
    pub public_id: String,
    pub name: String,
    pub settings: GameSettings,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Create a new, not yet persisted Game
    pub fn new(public_id: String, name: String, settings: GameSettings, metadata: Value) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            public_id,
            name,
            settings,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the configurable fields
    pub fn update(&mut self, name: String, settings: GameSettings, metadata: Value) {
        self.name = name;
        self.settings = settings;
        self.metadata = metadata;
        self.updated_at = Utc::now();
    }
}
