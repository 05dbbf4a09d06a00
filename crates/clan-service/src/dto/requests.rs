//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate`. Public id length
//! limits are left to the store, which reports overlong ids as constraint
//! violations.

use clan_core::{GameSettings, HookEventType};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

// ============================================================================
// Game Requests
// ============================================================================

/// Create game request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[validate(length(min = 1, message = "Game public id is required"))]
    pub public_id: String,

    #[validate(length(min = 1, max = 2000, message = "Game name must be 1-2000 characters"))]
    pub name: String,

    pub settings: GameSettings,

    #[serde(default = "empty_object")]
    pub metadata: Value,
}

/// Update game request; replaces every configurable field
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    #[validate(length(min = 1, max = 2000, message = "Game name must be 1-2000 characters"))]
    pub name: String,

    pub settings: GameSettings,

    #[serde(default = "empty_object")]
    pub metadata: Value,
}

// ============================================================================
// Player Requests
// ============================================================================

/// Create player request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, message = "Player public id is required"))]
    pub public_id: String,

    #[validate(length(min = 1, max = 2000, message = "Player name must be 1-2000 characters"))]
    pub name: String,

    #[serde(default = "empty_object")]
    pub metadata: Value,
}

/// Update player request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 2000, message = "Player name must be 1-2000 characters"))]
    pub name: String,

    #[serde(default = "empty_object")]
    pub metadata: Value,
}

// ============================================================================
// Clan Requests
// ============================================================================

/// Create clan request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClanRequest {
    #[validate(length(min = 1, message = "Clan public id is required"))]
    pub public_id: String,

    #[validate(length(min = 1, max = 2000, message = "Clan name must be 1-2000 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Owner public id is required"))]
    pub owner_public_id: String,

    #[serde(default = "empty_object")]
    pub metadata: Value,
}

/// Update clan request, only honoured for the current owner
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClanRequest {
    #[validate(length(min = 1, message = "Owner public id is required"))]
    pub owner_public_id: String,

    #[validate(length(min = 1, max = 2000, message = "Clan name must be 1-2000 characters"))]
    pub name: String,

    #[serde(default = "empty_object")]
    pub metadata: Value,
}

// ============================================================================
// Hook Requests
// ============================================================================

/// Register a webhook
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHookRequest {
    /// Integer event code
    #[serde(rename = "type")]
    pub event_type: HookEventType,

    #[validate(url(message = "Hook url must be a valid URL"))]
    pub url: String,
}

// ============================================================================
// Membership Requests
// ============================================================================

/// Apply to a clan
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyForMembershipRequest {
    #[validate(length(min = 1, message = "Player public id is required"))]
    pub player_public_id: String,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// Invite a player into a clan
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InviteForMembershipRequest {
    #[validate(length(min = 1, message = "Player public id is required"))]
    pub player_public_id: String,

    #[validate(length(min = 1, message = "Requestor public id is required"))]
    pub requestor_public_id: String,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// An action taken by `requestor_public_id` on the membership of
/// `player_public_id`: deciding an application, promoting, demoting or
/// deleting
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MembershipActionRequest {
    #[validate(length(min = 1, message = "Player public id is required"))]
    pub player_public_id: String,

    #[validate(length(min = 1, message = "Requestor public id is required"))]
    pub requestor_public_id: String,
}

/// The invited player answers their own invitation
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDecisionRequest {
    #[validate(length(min = 1, message = "Player public id is required"))]
    pub player_public_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_game_request_from_json() {
        let request: CreateGameRequest = serde_json::from_value(json!({
            "publicId": "game-1",
            "name": "Game",
            "settings": {
                "minMembershipLevel": 1,
                "maxMembershipLevel": 10,
                "minLevelToAcceptApplication": 5,
                "minLevelToCreateInvitation": 4,
                "minLevelOffsetToPromoteMember": 2,
                "minLevelOffsetToDemoteMember": 3,
                "allowApplication": true
            }
        }))
        .unwrap();
        assert_eq!(request.settings.min_level_to_create_invitation, 4);
        assert_eq!(request.metadata, json!({}));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = CreatePlayerRequest {
            public_id: "p".to_string(),
            name: String::new(),
            metadata: json!({}),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_hook_url_must_be_a_url() {
        let request: CreateHookRequest =
            serde_json::from_value(json!({"type": 7, "url": "not a url"})).unwrap();
        assert_eq!(request.event_type, HookEventType::MembershipApproved);
        assert!(request.validate().is_err());

        let request = CreateHookRequest {
            event_type: HookEventType::MembershipApproved,
            url: "http://localhost:8080/hooks".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_long_message_is_rejected() {
        let request = ApplyForMembershipRequest {
            player_public_id: "p".to_string(),
            message: Some("x".repeat(2001)),
        };
        assert!(request.validate().is_err());
    }
}
