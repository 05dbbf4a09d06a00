//! Clan service
//!
//! Clans are owned by a single player. The owner never holds a membership row
//! in their own clan.

use clan_core::entities::Clan;
use clan_core::error::DomainError;
use clan_core::events::ClanHookPayload;
use clan_core::value_objects::HookEventType;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ClanMemberResponse, ClanResponse, ClanWithOwner, CreateClanRequest, UpdateClanRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup;

/// Clan service
pub struct ClanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClanService<'a> {
    /// Create a new ClanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a clan owned by an existing player of the game
    #[instrument(skip(self, request), fields(clan_id = %request.public_id))]
    pub async fn create_clan(
        &self,
        game_id: &str,
        request: CreateClanRequest,
    ) -> ServiceResult<ClanResponse> {
        request.validate()?;
        let game = lookup::game(self.ctx, game_id).await?;
        let owner = lookup::player(self.ctx, &game.public_id, &request.owner_public_id).await?;

        let clan = Clan::new(
            game.public_id,
            request.public_id,
            request.name,
            owner.id,
            request.metadata,
        );
        let clan = self.ctx.clan_repo().create(&clan).await?;

        info!(
            game_id = %clan.game_id,
            clan_id = %clan.public_id,
            owner_id = %owner.public_id,
            "Clan created"
        );

        self.ctx.dispatcher().dispatch(
            &clan.game_id,
            HookEventType::ClanCreated,
            &ClanHookPayload::new(&clan, &owner),
        );

        Ok(ClanResponse::from(ClanWithOwner {
            clan: &clan,
            owner: &owner,
        }))
    }

    /// Update a clan; only its owner may do so
    #[instrument(skip(self, request))]
    pub async fn update_clan(
        &self,
        game_id: &str,
        public_id: &str,
        request: UpdateClanRequest,
    ) -> ServiceResult<ClanResponse> {
        request.validate()?;
        let game = lookup::game(self.ctx, game_id).await?;
        let mut clan = lookup::clan(self.ctx, &game.public_id, public_id).await?;
        let owner = lookup::player(self.ctx, &game.public_id, &request.owner_public_id).await?;

        if !clan.is_owner(owner.id) {
            return Err(DomainError::NotClanOwner("update the clan").into());
        }

        clan.update(request.name, request.metadata);
        self.ctx.clan_repo().update(&clan).await?;

        info!(game_id = %clan.game_id, clan_id = %clan.public_id, "Clan updated");

        self.ctx.dispatcher().dispatch(
            &clan.game_id,
            HookEventType::ClanUpdated,
            &ClanHookPayload::new(&clan, &owner),
        );

        Ok(ClanResponse::from(ClanWithOwner {
            clan: &clan,
            owner: &owner,
        }))
    }

    /// Get a clan by public id
    #[instrument(skip(self))]
    pub async fn get_clan(&self, game_id: &str, public_id: &str) -> ServiceResult<ClanResponse> {
        let game = lookup::game(self.ctx, game_id).await?;
        let clan = lookup::clan(self.ctx, &game.public_id, public_id).await?;
        let owner = lookup::player_by_id(self.ctx, clan.owner_id).await?;

        Ok(ClanResponse::from(ClanWithOwner {
            clan: &clan,
            owner: &owner,
        }))
    }

    /// Approved members, highest level first
    #[instrument(skip(self))]
    pub async fn list_members(
        &self,
        game_id: &str,
        public_id: &str,
    ) -> ServiceResult<Vec<ClanMemberResponse>> {
        let game = lookup::game(self.ctx, game_id).await?;
        let clan = lookup::clan(self.ctx, &game.public_id, public_id).await?;
        let memberships = self.ctx.membership_repo().find_approved_by_clan(clan.id).await?;

        let mut members = Vec::with_capacity(memberships.len());
        for membership in &memberships {
            let player = lookup::player_by_id(self.ctx, membership.player_id).await?;
            members.push(ClanMemberResponse::new(membership, &player));
        }
        Ok(members)
    }
}
