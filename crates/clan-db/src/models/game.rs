//! Game database model

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Database model for games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: i64,
    pub public_id: String,
    pub name: String,
    pub min_membership_level: i32,
    pub max_membership_level: i32,
    pub min_level_to_accept_application: i32,
    pub min_level_to_create_invitation: i32,
    pub min_level_offset_to_promote_member: i32,
    pub min_level_offset_to_demote_member: i32,
    pub allow_application: bool,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
