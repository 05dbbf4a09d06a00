//! Membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for memberships table
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub id: i64,
    pub game_id: String,
    pub clan_id: i64,
    pub player_id: i64,
    pub requestor_id: i64,
    pub level: i32,
    pub approved: bool,
    pub denied: bool,
    pub message: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,
}
