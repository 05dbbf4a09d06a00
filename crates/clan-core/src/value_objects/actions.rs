//! Membership action discriminators
//!
//! The routing layer passes `"approve"`/`"deny"` and `"promote"`/`"demote"`
//! as strings; they are parsed once into these enums.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Outcome requested for a pending application or invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalAction {
    Approve,
    Deny,
}

impl ApprovalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Deny => "deny",
        }
    }
}

impl FromStr for ApprovalAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "deny" => Ok(Self::Deny),
            other => Err(DomainError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level change requested for an approved member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelAction {
    Promote,
    Demote,
}

impl LevelAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Demote => "demote",
        }
    }
}

impl FromStr for LevelAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promote" => Ok(Self::Promote),
            "demote" => Ok(Self::Demote),
            other => Err(DomainError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for LevelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_approval_action() {
        assert_eq!("approve".parse::<ApprovalAction>().unwrap(), ApprovalAction::Approve);
        assert_eq!("deny".parse::<ApprovalAction>().unwrap(), ApprovalAction::Deny);

        let err = "Approve".parse::<ApprovalAction>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidAction(ref s) if s == "Approve"));
    }

    #[test]
    fn test_parse_level_action() {
        assert_eq!("promote".parse::<LevelAction>().unwrap(), LevelAction::Promote);
        assert_eq!("demote".parse::<LevelAction>().unwrap(), LevelAction::Demote);
        assert!("kick".parse::<LevelAction>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(ApprovalAction::Deny.to_string(), "deny");
        assert_eq!(LevelAction::Promote.to_string(), "promote");
    }
}
