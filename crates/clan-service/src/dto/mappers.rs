//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use clan_core::entities::{Clan, Game, Hook, Membership, Player};

use super::responses::{
    ClanMemberResponse, ClanResponse, GameResponse, HookResponse, MembershipResponse,
    PlayerResponse,
};

// ============================================================================
// Helper structs
// ============================================================================

/// Clan together with its owner
#[derive(Debug, Clone, Copy)]
pub struct ClanWithOwner<'a> {
    pub clan: &'a Clan,
    pub owner: &'a Player,
}

/// Membership together with the entities its ids point at
#[derive(Debug, Clone, Copy)]
pub struct MembershipWithParties<'a> {
    pub membership: &'a Membership,
    pub clan: &'a Clan,
    pub player: &'a Player,
    pub requestor: &'a Player,
}

// ============================================================================
// Mappers
// ============================================================================

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            public_id: game.public_id.clone(),
            name: game.name.clone(),
            settings: game.settings,
            metadata: game.metadata.clone(),
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            game_id: player.game_id.clone(),
            public_id: player.public_id.clone(),
            name: player.name.clone(),
            metadata: player.metadata.clone(),
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

impl From<ClanWithOwner<'_>> for ClanResponse {
    fn from(data: ClanWithOwner<'_>) -> Self {
        Self {
            game_id: data.clan.game_id.clone(),
            public_id: data.clan.public_id.clone(),
            name: data.clan.name.clone(),
            owner_public_id: data.owner.public_id.clone(),
            metadata: data.clan.metadata.clone(),
            created_at: data.clan.created_at,
            updated_at: data.clan.updated_at,
        }
    }
}

impl ClanMemberResponse {
    pub fn new(membership: &Membership, player: &Player) -> Self {
        Self {
            membership_id: membership.id,
            player_public_id: player.public_id.clone(),
            player_name: player.name.clone(),
            level: membership.level,
        }
    }
}

impl From<MembershipWithParties<'_>> for MembershipResponse {
    fn from(data: MembershipWithParties<'_>) -> Self {
        let m = data.membership;
        Self {
            id: m.id,
            game_id: m.game_id.clone(),
            clan_public_id: data.clan.public_id.clone(),
            player_public_id: data.player.public_id.clone(),
            requestor_public_id: data.requestor.public_id.clone(),
            level: m.level,
            approved: m.approved,
            denied: m.denied,
            state: m.state().to_string(),
            message: m.message.clone(),
            version: m.version,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

impl From<&Hook> for HookResponse {
    fn from(hook: &Hook) -> Self {
        Self {
            game_id: hook.game_id.clone(),
            public_id: hook.public_id.clone(),
            event_type: hook.event_type,
            url: hook.url.clone(),
            created_at: hook.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(id: i64, public_id: &str) -> Player {
        let mut player = Player::new("game".into(), public_id.into(), public_id.into(), json!({}));
        player.id = id;
        player
    }

    #[test]
    fn test_membership_response_uses_public_ids() {
        let mut clan = Clan::new("game".into(), "clan-x".into(), "X".into(), 1, json!({}));
        clan.id = 100;
        let applicant = player(2, "player-a");
        let approver = player(3, "player-c");
        let mut membership = Membership::new_application("game".into(), 100, 2, 1, None);
        membership.id = 42;
        membership.approve(3).unwrap();

        let response = MembershipResponse::from(MembershipWithParties {
            membership: &membership,
            clan: &clan,
            player: &applicant,
            requestor: &approver,
        });

        assert_eq!(response.id, 42);
        assert_eq!(response.clan_public_id, "clan-x");
        assert_eq!(response.player_public_id, "player-a");
        assert_eq!(response.requestor_public_id, "player-c");
        assert_eq!(response.state, "APPROVED");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["playerPublicId"], "player-a");
        assert!(json.get("deletedAt").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_hook_response_serializes_event_code() {
        let hook = Hook::new(
            "game".into(),
            "hook-1".into(),
            clan_core::HookEventType::MembershipLeft,
            "http://localhost/hook".into(),
        );
        let json = serde_json::to_value(HookResponse::from(&hook)).unwrap();
        assert_eq!(json["type"], 11);
        assert_eq!(json["url"], "http://localhost/hook");
    }
}
