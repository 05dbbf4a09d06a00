//! Game service
//!
//! Games carry the membership thresholds every other service reads.

use clan_core::entities::Game;
use clan_core::events::GameHookPayload;
use clan_core::value_objects::HookEventType;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateGameRequest, GameResponse, UpdateGameRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup;

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a game
    #[instrument(skip(self, request), fields(game_id = %request.public_id))]
    pub async fn create_game(&self, request: CreateGameRequest) -> ServiceResult<GameResponse> {
        request.validate()?;
        request.settings.validate()?;

        let game = Game::new(
            request.public_id,
            request.name,
            request.settings,
            request.metadata,
        );
        let game = self.ctx.game_repo().create(&game).await?;

        info!(game_id = %game.public_id, "Game created");

        Ok(GameResponse::from(&game))
    }

    /// Replace a game's name, settings and metadata
    #[instrument(skip(self, request))]
    pub async fn update_game(
        &self,
        public_id: &str,
        request: UpdateGameRequest,
    ) -> ServiceResult<GameResponse> {
        request.validate()?;
        request.settings.validate()?;

        let mut game = lookup::game(self.ctx, public_id).await?;
        game.update(request.name, request.settings, request.metadata);
        self.ctx.game_repo().update(&game).await?;

        info!(game_id = %game.public_id, "Game updated");

        self.ctx.dispatcher().dispatch(
            &game.public_id,
            HookEventType::GameUpdated,
            &GameHookPayload::from(&game),
        );

        Ok(GameResponse::from(&game))
    }

    /// Get a game by public id
    #[instrument(skip(self))]
    pub async fn get_game(&self, public_id: &str) -> ServiceResult<GameResponse> {
        let game = lookup::game(self.ctx, public_id).await?;
        Ok(GameResponse::from(&game))
    }
}
