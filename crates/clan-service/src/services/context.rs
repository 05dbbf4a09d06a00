//! Service context - dependency container for services
//!
//! Holds the repositories and the hook dispatcher. The store is injected, so
//! tests can run each scenario against an isolated [`MemoryStore`].

use std::sync::Arc;

use clan_core::traits::{
    ClanRepository, GameRepository, HookRepository, MembershipRepository, PlayerRepository,
};
use clan_db::{
    MemoryStore, PgClanRepository, PgGameRepository, PgHookRepository, PgMembershipRepository,
    PgPlayerRepository, PgPool,
};
use clan_hooks::HookDispatcher;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    game_repo: Arc<dyn GameRepository>,
    player_repo: Arc<dyn PlayerRepository>,
    clan_repo: Arc<dyn ClanRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    hook_repo: Arc<dyn HookRepository>,

    // Notifications
    dispatcher: Arc<HookDispatcher>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        game_repo: Arc<dyn GameRepository>,
        player_repo: Arc<dyn PlayerRepository>,
        clan_repo: Arc<dyn ClanRepository>,
        membership_repo: Arc<dyn MembershipRepository>,
        hook_repo: Arc<dyn HookRepository>,
        dispatcher: Arc<HookDispatcher>,
    ) -> Self {
        Self {
            game_repo,
            player_repo,
            clan_repo,
            membership_repo,
            hook_repo,
            dispatcher,
        }
    }

    /// Context backed by PostgreSQL repositories sharing `pool`
    pub fn postgres(pool: PgPool, dispatcher: Arc<HookDispatcher>) -> Self {
        Self::new(
            Arc::new(PgGameRepository::new(pool.clone())),
            Arc::new(PgPlayerRepository::new(pool.clone())),
            Arc::new(PgClanRepository::new(pool.clone())),
            Arc::new(PgMembershipRepository::new(pool.clone())),
            Arc::new(PgHookRepository::new(pool)),
            dispatcher,
        )
    }

    /// Context backed by an in-memory store
    pub fn in_memory(store: MemoryStore, dispatcher: Arc<HookDispatcher>) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            dispatcher,
        )
    }

    // === Repositories ===

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the player repository
    pub fn player_repo(&self) -> &dyn PlayerRepository {
        self.player_repo.as_ref()
    }

    /// Get the clan repository
    pub fn clan_repo(&self) -> &dyn ClanRepository {
        self.clan_repo.as_ref()
    }

    /// Get the membership repository
    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    /// Get the hook repository
    pub fn hook_repo(&self) -> &dyn HookRepository {
        self.hook_repo.as_ref()
    }

    // === Notifications ===

    /// Get the hook dispatcher
    pub fn dispatcher(&self) -> &HookDispatcher {
        self.dispatcher.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("dispatcher", &self.dispatcher.stats())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    game_repo: Option<Arc<dyn GameRepository>>,
    player_repo: Option<Arc<dyn PlayerRepository>>,
    clan_repo: Option<Arc<dyn ClanRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
    hook_repo: Option<Arc<dyn HookRepository>>,
    dispatcher: Option<Arc<HookDispatcher>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn player_repo(mut self, repo: Arc<dyn PlayerRepository>) -> Self {
        self.player_repo = Some(repo);
        self
    }

    pub fn clan_repo(mut self, repo: Arc<dyn ClanRepository>) -> Self {
        self.clan_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    pub fn hook_repo(mut self, repo: Arc<dyn HookRepository>) -> Self {
        self.hook_repo = Some(repo);
        self
    }

    pub fn dispatcher(mut self, dispatcher: Arc<HookDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.game_repo.ok_or_else(|| ServiceError::validation("game_repo is required"))?,
            self.player_repo.ok_or_else(|| ServiceError::validation("player_repo is required"))?,
            self.clan_repo.ok_or_else(|| ServiceError::validation("clan_repo is required"))?,
            self.membership_repo
                .ok_or_else(|| ServiceError::validation("membership_repo is required"))?,
            self.hook_repo.ok_or_else(|| ServiceError::validation("hook_repo is required"))?,
            self.dispatcher.ok_or_else(|| ServiceError::validation("dispatcher is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clan_hooks::HookDispatcherConfig;

    #[tokio::test]
    async fn test_builder_requires_every_dependency() {
        let store = MemoryStore::new();
        let err = ServiceContextBuilder::new()
            .game_repo(Arc::new(store.clone()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("player_repo is required"));

        let dispatcher =
            HookDispatcher::start(HookDispatcherConfig::default(), Arc::new(store.clone())).unwrap();
        let ctx = ServiceContextBuilder::new()
            .game_repo(Arc::new(store.clone()))
            .player_repo(Arc::new(store.clone()))
            .clan_repo(Arc::new(store.clone()))
            .membership_repo(Arc::new(store.clone()))
            .hook_repo(Arc::new(store))
            .dispatcher(dispatcher)
            .build();
        assert!(ctx.is_ok());
    }
}
