//! Membership entity - the relation between a player and a clan
//!
//! A membership row moves through
//! `PENDING_APPLICATION | PENDING_INVITATION -> APPROVED | DENIED`, and an
//! approved or pending row can be removed. Denied and removed rows are terminal;
//! a later application or invitation creates a new row.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Lifecycle state of a membership row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipState {
    PendingApplication,
    PendingInvitation,
    Approved,
    Denied,
    Removed,
}

impl MembershipState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApplication => "PENDING_APPLICATION",
            Self::PendingInvitation => "PENDING_INVITATION",
            Self::Approved => "APPROVED",
            Self::Denied => "DENIED",
            Self::Removed => "REMOVED",
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingApplication | Self::PendingInvitation)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Denied | Self::Removed)
    }
}

impl fmt::Display for MembershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub id: i64,
    /// Public id of the owning game
    pub game_id: String,
    pub clan_id: i64,
    /// The member
    pub player_id: i64,
    /// Player credited with the latest transition
    pub requestor_id: i64,
    pub level: i32,
    pub approved: bool,
    pub denied: bool,
    pub message: Option<String>,
    /// Row version, bumped by the store on every successful update
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,
}

impl Membership {
    fn pending(
        game_id: String,
        clan_id: i64,
        player_id: i64,
        requestor_id: i64,
        level: i32,
        message: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            game_id,
            clan_id,
            player_id,
            requestor_id,
            level,
            approved: false,
            denied: false,
            message,
            version: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            deleted_by: None,
        }
    }

    /// Create a pending application (requestor is the applicant)
    pub fn new_application(
        game_id: String,
        clan_id: i64,
        player_id: i64,
        level: i32,
        message: Option<String>,
    ) -> Self {
        Self::pending(game_id, clan_id, player_id, player_id, level, message)
    }

    /// Create a pending invitation authored by `requestor_id`
    pub fn new_invitation(
        game_id: String,
        clan_id: i64,
        player_id: i64,
        requestor_id: i64,
        level: i32,
        message: Option<String>,
    ) -> Self {
        Self::pending(game_id, clan_id, player_id, requestor_id, level, message)
    }

    /// Current lifecycle state
    pub fn state(&self) -> MembershipState {
        if self.deleted_at.is_some() {
            MembershipState::Removed
        } else if self.denied {
            MembershipState::Denied
        } else if self.approved {
            MembershipState::Approved
        } else if self.requestor_id == self.player_id {
            MembershipState::PendingApplication
        } else {
            MembershipState::PendingInvitation
        }
    }

    /// Active rows are the ones counted by the one-per-(player, clan) rule
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.state().is_terminal()
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        self.state() == MembershipState::Approved
    }

    /// Approve a pending membership
    pub fn approve(&mut self, by: i64) -> Result<(), DomainError> {
        self.require_pending("approve")?;
        self.approved = true;
        self.requestor_id = by;
        self.touch();
        Ok(())
    }

    /// Deny a pending membership
    pub fn deny(&mut self, by: i64) -> Result<(), DomainError> {
        self.require_pending("deny")?;
        self.denied = true;
        self.requestor_id = by;
        self.touch();
        Ok(())
    }

    /// Change the level of an approved membership
    pub fn set_level(&mut self, level: i32, by: i64) -> Result<(), DomainError> {
        if !self.is_approved() {
            return Err(DomainError::InvalidTransition {
                from: self.state(),
                action: "change the level of",
            });
        }
        self.level = level;
        self.requestor_id = by;
        self.touch();
        Ok(())
    }

    /// Logically delete an approved or pending membership
    pub fn remove(&mut self, by: i64) -> Result<(), DomainError> {
        if !self.is_active() {
            return Err(DomainError::InvalidTransition {
                from: self.state(),
                action: "remove",
            });
        }
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.deleted_by = Some(by);
        self.updated_at = now;
        Ok(())
    }

    fn require_pending(&self, action: &'static str) -> Result<(), DomainError> {
        let state = self.state();
        if state.is_pending() {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: state,
                action,
            })
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
