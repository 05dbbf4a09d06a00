//! Clan database model

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Database model for clans table
#[derive(Debug, Clone, FromRow)]
pub struct ClanModel {
    pub id: i64,
    pub game_id: String,
    pub public_id: String,
    pub name: String,
    pub owner_id: i64,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
