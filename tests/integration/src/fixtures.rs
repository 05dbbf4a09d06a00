//! Test fixtures and data generators
//!
//! Entities are created through the services so every fixture goes through
//! the same validation as production calls. Approved members at a given
//! level are written straight to the membership store.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use clan_core::entities::{GameSettings, Membership};
use clan_core::value_objects::HookEventType;
use clan_service::dto::{CreateClanRequest, CreateGameRequest, CreateHookRequest, CreatePlayerRequest};
use clan_service::{ClanService, GameService, HookService, PlayerService};
use serde_json::json;

use crate::helpers::TestApp;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique public id, also across runs sharing one database
pub fn unique_id(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{prefix}-{n}-{}", uuid::Uuid::new_v4().simple())
}

/// min 1, max 10, accept 5, invite 4, promote offset 2, demote offset 3
pub fn scenario_settings() -> GameSettings {
    GameSettings {
        min_membership_level: 1,
        max_membership_level: 10,
        min_level_to_accept_application: 5,
        min_level_to_create_invitation: 4,
        min_level_offset_to_promote_member: 2,
        min_level_offset_to_demote_member: 3,
        allow_application: true,
    }
}

/// A game with one clan
#[derive(Debug, Clone)]
pub struct Seed {
    pub game_id: String,
    pub clan_id: String,
    pub owner_id: String,
}

/// Create a game, an owner and a clan
pub async fn seed_clan(app: &TestApp, settings: GameSettings) -> Result<Seed> {
    let game_id = unique_id("game");
    GameService::new(&app.ctx)
        .create_game(CreateGameRequest {
            public_id: game_id.clone(),
            name: "Integration Game".to_string(),
            settings,
            metadata: json!({}),
        })
        .await?;

    let owner_id = create_player(app, &game_id, "owner").await?;

    let clan_id = unique_id("clan");
    ClanService::new(&app.ctx)
        .create_clan(
            &game_id,
            CreateClanRequest {
                public_id: clan_id.clone(),
                name: "Integration Clan".to_string(),
                owner_public_id: owner_id.clone(),
                metadata: json!({}),
            },
        )
        .await?;

    Ok(Seed {
        game_id,
        clan_id,
        owner_id,
    })
}

/// Create a player and return its public id
pub async fn create_player(app: &TestApp, game_id: &str, prefix: &str) -> Result<String> {
    let public_id = unique_id(prefix);
    PlayerService::new(&app.ctx)
        .create_player(
            game_id,
            CreatePlayerRequest {
                public_id: public_id.clone(),
                name: prefix.to_string(),
                metadata: json!({}),
            },
        )
        .await?;
    Ok(public_id)
}

/// Create a player holding an approved membership at `level`
pub async fn add_member(app: &TestApp, seed: &Seed, prefix: &str, level: i32) -> Result<String> {
    let public_id = create_player(app, &seed.game_id, prefix).await?;

    let player = app
        .ctx
        .player_repo()
        .find_by_public_id(&seed.game_id, &public_id)
        .await?
        .context("player just created")?;
    let clan = app
        .ctx
        .clan_repo()
        .find_by_public_id(&seed.game_id, &seed.clan_id)
        .await?
        .context("seeded clan")?;

    let mut membership =
        Membership::new_application(seed.game_id.clone(), clan.id, player.id, level, None);
    membership.approve(clan.owner_id)?;
    app.ctx.membership_repo().create(&membership).await?;

    Ok(public_id)
}

/// Register `url` for `event_type` on the seeded game
pub async fn register_hook(
    app: &TestApp,
    seed: &Seed,
    event_type: HookEventType,
    url: &str,
) -> Result<()> {
    HookService::new(&app.ctx)
        .create_hook(
            &seed.game_id,
            CreateHookRequest {
                event_type,
                url: url.to_string(),
            },
        )
        .await?;
    Ok(())
}
