//! Membership service
//!
//! Every operation follows the same sequence: resolve the game, clan and
//! players; check the transition with [`MembershipRules`]; write the row
//! (updates are compare-and-swap on the row version, so a lost race surfaces
//! as a conflict); then dispatch the hook event. Hook delivery happens off the
//! request path and never affects the result.

use clan_core::entities::{Clan, Game, Membership, Player};
use clan_core::error::DomainError;
use clan_core::events::MembershipHookPayload;
use clan_core::rules::{LevelChange, MembershipRules};
use clan_core::value_objects::{ApprovalAction, HookEventType, LevelAction};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ApplyForMembershipRequest, InvitationDecisionRequest, InviteForMembershipRequest,
    MembershipActionRequest, MembershipResponse, MembershipWithParties,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup;

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A player applies to join a clan
    #[instrument(skip(self, request), fields(player_id = %request.player_public_id))]
    pub async fn apply(
        &self,
        game_id: &str,
        clan_id: &str,
        request: ApplyForMembershipRequest,
    ) -> ServiceResult<MembershipResponse> {
        request.validate()?;
        let (game, clan) = self.scope(game_id, clan_id).await?;
        let applicant = lookup::player(self.ctx, &game.public_id, &request.player_public_id).await?;

        let rules = MembershipRules::new(&game);
        rules.check_application(&clan, applicant.id)?;
        self.ensure_no_active(&clan, &applicant).await?;

        let membership = Membership::new_application(
            game.public_id.clone(),
            clan.id,
            applicant.id,
            rules.initial_level(),
            request.message,
        );
        let membership = self.ctx.membership_repo().create(&membership).await?;

        info!(
            game_id = %game.public_id,
            clan_id = %clan.public_id,
            player_id = %applicant.public_id,
            membership_id = membership.id,
            "Membership application created"
        );

        self.notify(
            HookEventType::MembershipApplicationCreated,
            &clan,
            &applicant,
            &applicant,
            &membership,
        );
        Ok(respond(&membership, &clan, &applicant, &applicant))
    }

    /// A clan member invites a player
    #[instrument(
        skip(self, request),
        fields(player_id = %request.player_public_id, requestor_id = %request.requestor_public_id)
    )]
    pub async fn invite(
        &self,
        game_id: &str,
        clan_id: &str,
        request: InviteForMembershipRequest,
    ) -> ServiceResult<MembershipResponse> {
        request.validate()?;
        let (game, clan) = self.scope(game_id, clan_id).await?;
        let invited = lookup::player(self.ctx, &game.public_id, &request.player_public_id).await?;
        let requestor =
            lookup::player(self.ctx, &game.public_id, &request.requestor_public_id).await?;

        let rules = MembershipRules::new(&game);
        let authority = lookup::authority(self.ctx, &clan, &requestor).await?;
        rules.check_invitation(&clan, authority, invited.id)?;
        self.ensure_no_active(&clan, &invited).await?;

        let membership = Membership::new_invitation(
            game.public_id.clone(),
            clan.id,
            invited.id,
            requestor.id,
            rules.initial_level(),
            request.message,
        );
        let membership = self.ctx.membership_repo().create(&membership).await?;

        info!(
            game_id = %game.public_id,
            clan_id = %clan.public_id,
            player_id = %invited.public_id,
            requestor_id = %requestor.public_id,
            membership_id = membership.id,
            "Membership invitation created"
        );

        self.notify(
            HookEventType::MembershipInvitationCreated,
            &clan,
            &invited,
            &requestor,
            &membership,
        );
        Ok(respond(&membership, &clan, &invited, &requestor))
    }

    /// A clan member approves or denies a pending application
    ///
    /// `action` is `"approve"` or `"deny"`.
    #[instrument(
        skip(self, request),
        fields(player_id = %request.player_public_id, requestor_id = %request.requestor_public_id)
    )]
    pub async fn approve_or_deny_application(
        &self,
        game_id: &str,
        clan_id: &str,
        action: &str,
        request: MembershipActionRequest,
    ) -> ServiceResult<MembershipResponse> {
        let action: ApprovalAction = action.parse()?;
        request.validate()?;
        let (game, clan) = self.scope(game_id, clan_id).await?;
        let applicant = lookup::player(self.ctx, &game.public_id, &request.player_public_id).await?;
        let approver =
            lookup::player(self.ctx, &game.public_id, &request.requestor_public_id).await?;

        let mut membership = self.active_membership(&clan, &applicant).await?;
        let authority = lookup::authority(self.ctx, &clan, &approver).await?;
        MembershipRules::new(&game).check_application_decision(authority, &membership)?;

        let event_type = decide(&mut membership, action, approver.id)?;
        let membership = self.ctx.membership_repo().update(&membership).await?;

        info!(
            game_id = %game.public_id,
            clan_id = %clan.public_id,
            player_id = %applicant.public_id,
            requestor_id = %approver.public_id,
            action = %action,
            "Membership application decided"
        );

        self.notify(event_type, &clan, &applicant, &approver, &membership);
        Ok(respond(&membership, &clan, &applicant, &approver))
    }

    /// The invited player approves or denies their own invitation
    ///
    /// `action` is `"approve"` or `"deny"`.
    #[instrument(skip(self, request), fields(player_id = %request.player_public_id))]
    pub async fn approve_or_deny_invitation(
        &self,
        game_id: &str,
        clan_id: &str,
        action: &str,
        request: InvitationDecisionRequest,
    ) -> ServiceResult<MembershipResponse> {
        let action: ApprovalAction = action.parse()?;
        request.validate()?;
        let (game, clan) = self.scope(game_id, clan_id).await?;
        let invited = lookup::player(self.ctx, &game.public_id, &request.player_public_id).await?;

        let mut membership = self.active_membership(&clan, &invited).await?;
        MembershipRules::new(&game).check_invitation_decision(&membership)?;

        let event_type = decide(&mut membership, action, invited.id)?;
        let membership = self.ctx.membership_repo().update(&membership).await?;

        info!(
            game_id = %game.public_id,
            clan_id = %clan.public_id,
            player_id = %invited.public_id,
            action = %action,
            "Membership invitation decided"
        );

        self.notify(event_type, &clan, &invited, &invited, &membership);
        Ok(respond(&membership, &clan, &invited, &invited))
    }

    /// Promote or demote an approved member by one level
    ///
    /// `action` is `"promote"` or `"demote"`. Demoting a member at the minimum
    /// level removes them from the clan.
    #[instrument(
        skip(self, request),
        fields(player_id = %request.player_public_id, requestor_id = %request.requestor_public_id)
    )]
    pub async fn promote_or_demote(
        &self,
        game_id: &str,
        clan_id: &str,
        action: &str,
        request: MembershipActionRequest,
    ) -> ServiceResult<MembershipResponse> {
        let action: LevelAction = action.parse()?;
        request.validate()?;
        let (game, clan) = self.scope(game_id, clan_id).await?;
        let target = lookup::player(self.ctx, &game.public_id, &request.player_public_id).await?;
        let requestor =
            lookup::player(self.ctx, &game.public_id, &request.requestor_public_id).await?;

        let mut membership = self.active_membership(&clan, &target).await?;
        let authority = lookup::authority(self.ctx, &clan, &requestor).await?;
        let change =
            MembershipRules::new(&game).check_level_change(action, authority, &membership)?;

        let previous_level = membership.level;
        let event_type = match change {
            LevelChange::SetLevel(level) => {
                membership.set_level(level, requestor.id)?;
                match action {
                    LevelAction::Promote => HookEventType::MembershipPromoted,
                    LevelAction::Demote => HookEventType::MembershipDemoted,
                }
            }
            LevelChange::Remove => {
                membership.remove(requestor.id)?;
                HookEventType::MembershipLeft
            }
        };
        let membership = self.ctx.membership_repo().update(&membership).await?;

        info!(
            game_id = %game.public_id,
            clan_id = %clan.public_id,
            player_id = %target.public_id,
            requestor_id = %requestor.public_id,
            action = %action,
            from_level = previous_level,
            to_level = membership.level,
            removed = membership.deleted_at.is_some(),
            "Membership level changed"
        );

        self.notify(event_type, &clan, &target, &requestor, &membership);
        Ok(respond(&membership, &clan, &target, &requestor))
    }

    /// Remove a member (or a pending membership) from the clan
    #[instrument(
        skip(self, request),
        fields(player_id = %request.player_public_id, requestor_id = %request.requestor_public_id)
    )]
    pub async fn delete(
        &self,
        game_id: &str,
        clan_id: &str,
        request: MembershipActionRequest,
    ) -> ServiceResult<MembershipResponse> {
        request.validate()?;
        let (game, clan) = self.scope(game_id, clan_id).await?;
        let target = lookup::player(self.ctx, &game.public_id, &request.player_public_id).await?;
        let requestor =
            lookup::player(self.ctx, &game.public_id, &request.requestor_public_id).await?;

        let mut membership = self.active_membership(&clan, &target).await?;
        let authority = lookup::authority(self.ctx, &clan, &requestor).await?;
        MembershipRules::new(&game).check_removal(requestor.id, authority, &membership)?;

        membership.remove(requestor.id)?;
        let membership = self.ctx.membership_repo().update(&membership).await?;

        info!(
            game_id = %game.public_id,
            clan_id = %clan.public_id,
            player_id = %target.public_id,
            requestor_id = %requestor.public_id,
            "Membership deleted"
        );

        self.notify(
            HookEventType::MembershipLeft,
            &clan,
            &target,
            &requestor,
            &membership,
        );
        Ok(respond(&membership, &clan, &target, &requestor))
    }

    /// Fetch a membership by id, including denied and removed rows
    #[instrument(skip(self))]
    pub async fn get_membership(&self, id: i64) -> ServiceResult<MembershipResponse> {
        let membership = self
            .ctx
            .membership_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::MembershipNotFound(id.to_string()))?;

        let clan = lookup::clan_by_id(self.ctx, membership.clan_id).await?;
        let player = lookup::player_by_id(self.ctx, membership.player_id).await?;
        let requestor = if membership.requestor_id == membership.player_id {
            player.clone()
        } else {
            lookup::player_by_id(self.ctx, membership.requestor_id).await?
        };

        Ok(respond(&membership, &clan, &player, &requestor))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn scope(&self, game_id: &str, clan_id: &str) -> ServiceResult<(Game, Clan)> {
        let game = lookup::game(self.ctx, game_id).await?;
        let clan = lookup::clan(self.ctx, &game.public_id, clan_id).await?;
        Ok((game, clan))
    }

    async fn active_membership(&self, clan: &Clan, player: &Player) -> ServiceResult<Membership> {
        self.ctx
            .membership_repo()
            .find_active(clan.id, player.id)
            .await?
            .ok_or_else(|| {
                DomainError::MembershipNotFound(format!("{}/{}", clan.public_id, player.public_id))
                    .into()
            })
    }

    async fn ensure_no_active(&self, clan: &Clan, player: &Player) -> ServiceResult<()> {
        if self
            .ctx
            .membership_repo()
            .find_active(clan.id, player.id)
            .await?
            .is_some()
        {
            return Err(DomainError::MembershipAlreadyExists.into());
        }
        Ok(())
    }

    fn notify(
        &self,
        event_type: HookEventType,
        clan: &Clan,
        player: &Player,
        requestor: &Player,
        membership: &Membership,
    ) {
        let payload = MembershipHookPayload::new(event_type, clan, player, requestor, membership);
        self.ctx
            .dispatcher()
            .dispatch(&membership.game_id, event_type, &payload);
    }
}

/// Apply an approve/deny decision and return the matching event
fn decide(
    membership: &mut Membership,
    action: ApprovalAction,
    by: i64,
) -> Result<HookEventType, DomainError> {
    match action {
        ApprovalAction::Approve => {
            membership.approve(by)?;
            Ok(HookEventType::MembershipApproved)
        }
        ApprovalAction::Deny => {
            membership.deny(by)?;
            Ok(HookEventType::MembershipDenied)
        }
    }
}

fn respond(
    membership: &Membership,
    clan: &Clan,
    player: &Player,
    requestor: &Player,
) -> MembershipResponse {
    MembershipResponse::from(MembershipWithParties {
        membership,
        clan,
        player,
        requestor,
    })
}
