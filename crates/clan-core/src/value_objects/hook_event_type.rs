//! Hook event types
//!
//! Persisted and sent on the wire as stable integer codes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookEventType {
    GameUpdated,
    PlayerCreated,
    PlayerUpdated,
    ClanCreated,
    ClanUpdated,
    MembershipApplicationCreated,
    MembershipInvitationCreated,
    MembershipApproved,
    MembershipDenied,
    MembershipPromoted,
    MembershipDemoted,
    MembershipLeft,
}

impl HookEventType {
    pub const ALL: [Self; 12] = [
        Self::GameUpdated,
        Self::PlayerCreated,
        Self::PlayerUpdated,
        Self::ClanCreated,
        Self::ClanUpdated,
        Self::MembershipApplicationCreated,
        Self::MembershipInvitationCreated,
        Self::MembershipApproved,
        Self::MembershipDenied,
        Self::MembershipPromoted,
        Self::MembershipDemoted,
        Self::MembershipLeft,
    ];

    /// Stable integer code
    pub const fn code(self) -> i32 {
        match self {
            Self::GameUpdated => 0,
            Self::PlayerCreated => 1,
            Self::PlayerUpdated => 2,
            Self::ClanCreated => 3,
            Self::ClanUpdated => 4,
            Self::MembershipApplicationCreated => 5,
            Self::MembershipInvitationCreated => 6,
            Self::MembershipApproved => 7,
            Self::MembershipDenied => 8,
            Self::MembershipPromoted => 9,
            Self::MembershipDemoted => 10,
            Self::MembershipLeft => 11,
        }
    }

    /// Parse a stored code
    pub fn from_code(code: i32) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(DomainError::UnknownHookEventType(code))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GameUpdated => "GAME_UPDATED",
            Self::PlayerCreated => "PLAYER_CREATED",
            Self::PlayerUpdated => "PLAYER_UPDATED",
            Self::ClanCreated => "CLAN_CREATED",
            Self::ClanUpdated => "CLAN_UPDATED",
            Self::MembershipApplicationCreated => "MEMBERSHIP_APPLICATION_CREATED",
            Self::MembershipInvitationCreated => "MEMBERSHIP_INVITATION_CREATED",
            Self::MembershipApproved => "MEMBERSHIP_APPROVED",
            Self::MembershipDenied => "MEMBERSHIP_DENIED",
            Self::MembershipPromoted => "MEMBERSHIP_PROMOTED",
            Self::MembershipDemoted => "MEMBERSHIP_DEMOTED",
            Self::MembershipLeft => "MEMBERSHIP_LEFT",
        }
    }
}

impl fmt::Display for HookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HookEventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for HookEventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_parse_back() {
        for (index, event_type) in HookEventType::ALL.into_iter().enumerate() {
            assert_eq!(event_type.code(), index as i32);
            assert_eq!(HookEventType::from_code(event_type.code()).unwrap(), event_type);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            HookEventType::from_code(42),
            Err(DomainError::UnknownHookEventType(42))
        ));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&HookEventType::MembershipApproved).unwrap();
        assert_eq!(json, "7");

        let parsed: HookEventType = serde_json::from_str("11").unwrap();
        assert_eq!(parsed, HookEventType::MembershipLeft);
        assert!(serde_json::from_str::<HookEventType>("99").is_err());
    }
}
