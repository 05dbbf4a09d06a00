//! Hook payloads - JSON bodies posted to registered webhooks
//!
//! Ids in payloads are the public (game-scoped) ids, never the internal
//! numeric ones, except `membershipID` which has no public form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{Clan, Game, GameSettings, Membership, Player};
use crate::value_objects::HookEventType;

// ============================================================================
// Membership
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipHookPayload {
    #[serde(rename = "type")]
    pub event_type: HookEventType,
    #[serde(rename = "gameID")]
    pub game_id: String,
    #[serde(rename = "clanID")]
    pub clan_id: String,
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "requestorID")]
    pub requestor_id: String,
    #[serde(rename = "membershipID")]
    pub membership_id: i64,
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MembershipHookPayload {
    /// Build the payload for a membership transition
    pub fn new(
        event_type: HookEventType,
        clan: &Clan,
        player: &Player,
        requestor: &Player,
        membership: &Membership,
    ) -> Self {
        Self {
            event_type,
            game_id: membership.game_id.clone(),
            clan_id: clan.public_id.clone(),
            player_id: player.public_id.clone(),
            requestor_id: requestor.public_id.clone(),
            membership_id: membership.id,
            level: membership.level,
            message: membership.message.clone(),
        }
    }
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHookPayload {
    #[serde(rename = "gameID")]
    pub game_id: String,
    #[serde(rename = "publicID")]
    pub public_id: String,
    pub name: String,
    pub metadata: Value,
}

impl From<&Player> for PlayerHookPayload {
    fn from(player: &Player) -> Self {
        Self {
            game_id: player.game_id.clone(),
            public_id: player.public_id.clone(),
            name: player.name.clone(),
            metadata: player.metadata.clone(),
        }
    }
}

// ============================================================================
// Clan
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanHookPayload {
    #[serde(rename = "gameID")]
    pub game_id: String,
    #[serde(rename = "publicID")]
    pub public_id: String,
    pub name: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    pub metadata: Value,
}

impl ClanHookPayload {
    pub fn new(clan: &Clan, owner: &Player) -> Self {
        Self {
            game_id: clan.game_id.clone(),
            public_id: clan.public_id.clone(),
            name: clan.name.clone(),
            owner_id: owner.public_id.clone(),
            metadata: clan.metadata.clone(),
        }
    }
}

// ============================================================================
// Game
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHookPayload {
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub name: String,
    pub settings: GameSettings,
    pub metadata: Value,
}

impl From<&Game> for GameHookPayload {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.public_id.clone(),
            name: game.name.clone(),
            settings: game.settings,
            metadata: game.metadata.clone(),
        }
    }
}
