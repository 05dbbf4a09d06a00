//! Hook database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for hooks table
#[derive(Debug, Clone, FromRow)]
pub struct HookModel {
    pub id: i64,
    pub game_id: String,
    pub public_id: String,
    /// Stable `HookEventType` code
    pub event_type: i32,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
