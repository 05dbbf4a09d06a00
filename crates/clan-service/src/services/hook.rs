//! Hook service
//!
//! Registers webhook endpoints. Delivery is done by the dispatcher.

use clan_core::entities::Hook;
use clan_core::value_objects::HookEventType;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreateHookRequest, HookResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lookup;

/// Hook service
pub struct HookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HookService<'a> {
    /// Create a new HookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a webhook for one event type of a game
    #[instrument(skip(self, request), fields(event_type = %request.event_type))]
    pub async fn create_hook(
        &self,
        game_id: &str,
        request: CreateHookRequest,
    ) -> ServiceResult<HookResponse> {
        request.validate()?;
        if !(request.url.starts_with("http://") || request.url.starts_with("https://")) {
            return Err(ServiceError::validation("Hook url must use http or https"));
        }
        let game = lookup::game(self.ctx, game_id).await?;

        let hook = Hook::new(
            game.public_id,
            Uuid::new_v4().to_string(),
            request.event_type,
            request.url,
        );
        let hook = self.ctx.hook_repo().create(&hook).await?;

        info!(
            game_id = %hook.game_id,
            hook_id = %hook.public_id,
            event_type = %hook.event_type,
            "Hook registered"
        );

        Ok(HookResponse::from(&hook))
    }

    /// Remove a webhook
    #[instrument(skip(self))]
    pub async fn remove_hook(&self, game_id: &str, public_id: &str) -> ServiceResult<()> {
        let game = lookup::game(self.ctx, game_id).await?;
        self.ctx.hook_repo().delete(&game.public_id, public_id).await?;

        info!(game_id = %game.public_id, hook_id = %public_id, "Hook removed");
        Ok(())
    }

    /// Hooks of a game, optionally restricted to one event type
    #[instrument(skip(self))]
    pub async fn list_hooks(
        &self,
        game_id: &str,
        event_type: Option<HookEventType>,
    ) -> ServiceResult<Vec<HookResponse>> {
        let game = lookup::game(self.ctx, game_id).await?;
        let hooks = match event_type {
            Some(event_type) => {
                self.ctx
                    .hook_repo()
                    .find_by_game_and_type(&game.public_id, event_type)
                    .await?
            }
            None => self.ctx.hook_repo().find_by_game(&game.public_id).await?,
        };
        Ok(hooks.iter().map(HookResponse::from).collect())
    }
}
