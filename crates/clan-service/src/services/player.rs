//! Player service

use clan_core::entities::Player;
use clan_core::events::PlayerHookPayload;
use clan_core::value_objects::HookEventType;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup;

/// Player service
pub struct PlayerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerService<'a> {
    /// Create a new PlayerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a player in a game
    #[instrument(skip(self, request), fields(player_id = %request.public_id))]
    pub async fn create_player(
        &self,
        game_id: &str,
        request: CreatePlayerRequest,
    ) -> ServiceResult<PlayerResponse> {
        request.validate()?;
        let game = lookup::game(self.ctx, game_id).await?;

        let player = Player::new(
            game.public_id,
            request.public_id,
            request.name,
            request.metadata,
        );
        let player = self.ctx.player_repo().create(&player).await?;

        info!(game_id = %player.game_id, player_id = %player.public_id, "Player created");

        self.ctx.dispatcher().dispatch(
            &player.game_id,
            HookEventType::PlayerCreated,
            &PlayerHookPayload::from(&player),
        );

        Ok(PlayerResponse::from(&player))
    }

    /// Update a player's name and metadata
    #[instrument(skip(self, request))]
    pub async fn update_player(
        &self,
        game_id: &str,
        public_id: &str,
        request: UpdatePlayerRequest,
    ) -> ServiceResult<PlayerResponse> {
        request.validate()?;
        let game = lookup::game(self.ctx, game_id).await?;

        let mut player = lookup::player(self.ctx, &game.public_id, public_id).await?;
        player.update(request.name, request.metadata);
        self.ctx.player_repo().update(&player).await?;

        info!(game_id = %player.game_id, player_id = %player.public_id, "Player updated");

        self.ctx.dispatcher().dispatch(
            &player.game_id,
            HookEventType::PlayerUpdated,
            &PlayerHookPayload::from(&player),
        );

        Ok(PlayerResponse::from(&player))
    }

    /// Get a player by public id
    #[instrument(skip(self))]
    pub async fn get_player(&self, game_id: &str, public_id: &str) -> ServiceResult<PlayerResponse> {
        let game = lookup::game(self.ctx, game_id).await?;
        let player = lookup::player(self.ctx, &game.public_id, public_id).await?;
        Ok(PlayerResponse::from(&player))
    }
}
