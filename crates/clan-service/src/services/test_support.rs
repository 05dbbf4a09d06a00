//! Fixtures for service tests

use std::sync::Arc;

use clan_core::entities::{Clan, Game, GameSettings, Membership, Player};
use clan_core::traits::{ClanRepository, GameRepository, MembershipRepository, PlayerRepository};
use clan_db::MemoryStore;
use clan_hooks::{HookDispatcher, HookDispatcherConfig};
use serde_json::json;

use crate::dto::CreateGameRequest;

use super::context::ServiceContext;

pub(crate) const GAME: &str = "game";
pub(crate) const CLAN: &str = "clan";
pub(crate) const OWNER: &str = "owner";

/// min 1, max 10, accept 5, invite 4, promote offset 2, demote offset 3
pub(crate) fn settings() -> GameSettings {
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

pub(crate) fn game_request(public_id: &str) -> CreateGameRequest {
    CreateGameRequest {
        public_id: public_id.to_string(),
        name: "Test Game".to_string(),
        settings: settings(),
        metadata: json!({}),
    }
}

pub(crate) struct TestContext {
    pub ctx: ServiceContext,
    pub store: MemoryStore,
}

impl TestContext {
    /// Must be called inside a Tokio runtime
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let dispatcher =
            HookDispatcher::start(HookDispatcherConfig::default(), Arc::new(store.clone()))
                .unwrap();
        Self {
            ctx: ServiceContext::in_memory(store.clone(), dispatcher),
            store,
        }
    }

    /// Game `GAME` and clan `CLAN` owned by `OWNER`
    pub async fn seeded(settings: GameSettings) -> (Self, Clan) {
        let t = Self::new();
        GameRepository::create(
            &t.store,
            &Game::new(GAME.into(), "Test Game".into(), settings, json!({})),
        )
        .await
        .unwrap();
        let owner = t.player(OWNER).await;
        let clan = ClanRepository::create(
            &t.store,
            &Clan::new(GAME.into(), CLAN.into(), "Test Clan".into(), owner.id, json!({})),
        )
        .await
        .unwrap();
        (t, clan)
    }

    pub async fn player(&self, public_id: &str) -> Player {
        PlayerRepository::create(
            &self.store,
            &Player::new(GAME.into(), public_id.into(), public_id.into(), json!({})),
        )
        .await
        .unwrap()
    }

    /// New player with an approved membership at `level`
    pub async fn member(&self, clan: &Clan, public_id: &str, level: i32) -> Membership {
        let player = self.player(public_id).await;
        let mut membership = Membership::new_application(GAME.into(), clan.id, player.id, level, None);
        membership.approve(clan.owner_id).unwrap();
        MembershipRepository::create(&self.store, &membership)
            .await
            .unwrap()
    }
}
