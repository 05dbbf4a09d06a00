//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output. Related entities
//! are referenced by their public ids.

use chrono::{DateTime, Utc};
use clan_core::{GameSettings, HookEventType};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Game Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub public_id: String,
    pub name: String,
    pub settings: GameSettings,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Player Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub game_id: String,
    pub public_id: String,
    pub name: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Clan Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanResponse {
    pub game_id: String,
    pub public_id: String,
    pub name: String,
    pub owner_public_id: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One approved member in a clan roster
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanMemberResponse {
    pub membership_id: i64,
    pub player_public_id: String,
    pub player_name: String,
    pub level: i32,
}

// ============================================================================
// Membership Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: i64,
    pub game_id: String,
    pub clan_public_id: String,
    pub player_public_id: String,
    pub requestor_public_id: String,
    pub level: i32,
    pub approved: bool,
    pub denied: bool,
    /// `PENDING_APPLICATION`, `PENDING_INVITATION`, `APPROVED`, `DENIED` or `REMOVED`
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Hook Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    pub game_id: String,
    pub public_id: String,
    #[serde(rename = "type")]
    pub event_type: HookEventType,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
