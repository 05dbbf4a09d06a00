//! Membership rules - who may move a membership between states
//!
//! The rules are pure: they inspect the game settings, the clan, the
//! requestor's [`Authority`] and the target row, and either return the
//! permitted outcome or the [`DomainError`] explaining the refusal. Loading
//! and persisting rows is left to the caller.
//!
//! Acceptance thresholds are inclusive (`level >= threshold`); promotion and
//! demotion require `requestor.level - target.level >= offset`.

use crate::entities::{Clan, Game, GameSettings, Membership, MembershipState};
use crate::error::DomainError;
use crate::value_objects::{Authority, LevelAction};

/// Outcome of a permitted promote/demote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    /// Move the membership to this level
    SetLevel(i32),
    /// Demoted below the floor; the membership leaves the clan
    Remove,
}

/// Membership rules bound to one game's settings
#[derive(Debug, Clone, Copy)]
pub struct MembershipRules<'a> {
    settings: &'a GameSettings,
}

impl<'a> MembershipRules<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            settings: &game.settings,
        }
    }

    /// Level given to new applications and invitations
    #[inline]
    pub fn initial_level(&self) -> i32 {
        self.settings.min_membership_level
    }

    /// A player applies to `clan`
    ///
    /// No level check applies to the applicant; the caller still has to
    /// guard against an existing active membership.
    pub fn check_application(&self, clan: &Clan, applicant_id: i64) -> Result<(), DomainError> {
        if !self.settings.allow_application {
            return Err(DomainError::ApplicationsNotAllowed);
        }
        if clan.is_owner(applicant_id) {
            return Err(DomainError::OwnerCannotJoin);
        }
        Ok(())
    }

    /// `requestor` invites `invited_id` into `clan`
    pub fn check_invitation(
        &self,
        clan: &Clan,
        requestor: Authority,
        invited_id: i64,
    ) -> Result<(), DomainError> {
        let required = self.settings.min_level_to_create_invitation;
        if !requestor.meets_level(required) {
            return Err(DomainError::InsufficientLevel {
                action: "create invitations",
                required,
            });
        }
        if clan.is_owner(invited_id) {
            return Err(DomainError::OwnerCannotJoin);
        }
        Ok(())
    }

    /// `approver` approves or denies a pending application
    pub fn check_application_decision(
        &self,
        approver: Authority,
        membership: &Membership,
    ) -> Result<(), DomainError> {
        require_state(membership, MembershipState::PendingApplication, "decide on")?;

        let required = self.settings.min_level_to_accept_application;
        if !approver.meets_level(required) {
            return Err(DomainError::InsufficientLevel {
                action: "accept applications",
                required,
            });
        }
        Ok(())
    }

    /// The invited player approves or denies their own invitation
    pub fn check_invitation_decision(&self, membership: &Membership) -> Result<(), DomainError> {
        require_state(membership, MembershipState::PendingInvitation, "decide on")
    }

    /// `requestor` promotes or demotes the approved `target`
    pub fn check_level_change(
        &self,
        action: LevelAction,
        requestor: Authority,
        target: &Membership,
    ) -> Result<LevelChange, DomainError> {
        require_state(target, MembershipState::Approved, action.as_str())?;

        let required = match action {
            LevelAction::Promote => self.settings.min_level_offset_to_promote_member,
            LevelAction::Demote => self.settings.min_level_offset_to_demote_member,
        };
        if !requestor.exceeds_by(target.level, required) {
            return Err(DomainError::InsufficientLevelOffset {
                action: action.as_str(),
                required,
            });
        }

        let min = self.settings.min_membership_level;
        let max = self.settings.max_membership_level;
        match action {
            LevelAction::Promote if target.level >= max => Err(DomainError::AlreadyAtMaxLevel(max)),
            LevelAction::Promote => Ok(LevelChange::SetLevel((target.level + 1).max(min))),
            LevelAction::Demote if target.level <= min => Ok(LevelChange::Remove),
            LevelAction::Demote => Ok(LevelChange::SetLevel((target.level - 1).min(max))),
        }
    }

    /// `requestor_id` removes `target` from the clan
    ///
    /// Self-removal is always allowed; otherwise the demotion offset applies
    /// (the owner always passes).
    pub fn check_removal(
        &self,
        requestor_id: i64,
        requestor: Authority,
        target: &Membership,
    ) -> Result<(), DomainError> {
        if !target.is_active() {
            return Err(DomainError::InvalidTransition {
                from: target.state(),
                action: "remove",
            });
        }
        if requestor_id == target.player_id {
            return Ok(());
        }
        if requestor.exceeds_by(target.level, self.settings.min_level_offset_to_demote_member) {
            return Ok(());
        }
        Err(DomainError::CannotRemoveMembership)
    }
}

fn require_state(
    membership: &Membership,
    expected: MembershipState,
    action: &'static str,
) -> Result<(), DomainError> {
    let from = membership.state();
    if from == expected {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition { from, action })
    }
}
