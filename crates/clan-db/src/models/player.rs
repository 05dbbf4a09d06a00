//! Player database model

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;

/// Database model for players table
#[derive(Debug, Clone, FromRow)]
pub struct PlayerModel {
    pub id: i64,
    pub game_id: String,
    pub public_id: String,
    pub name: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
