//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Ids are assigned by the store: `create` takes an entity with `id == 0`
//! and returns the stored copy.

use async_trait::async_trait;

use crate::entities::{Clan, Game, Hook, Membership, Player};
use crate::error::DomainError;
use crate::value_objects::HookEventType;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find game by public id
    async fn find_by_public_id(&self, public_id: &str) -> RepoResult<Option<Game>>;

    /// Create a new game
    async fn create(&self, game: &Game) -> RepoResult<Game>;

    /// Update an existing game
    async fn update(&self, game: &Game) -> RepoResult<()>;
}

// ============================================================================
// Player Repository
// ============================================================================

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find player by internal id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Player>>;

    /// Find player by public id within a game
    async fn find_by_public_id(&self, game_id: &str, public_id: &str)
        -> RepoResult<Option<Player>>;

    /// Create a new player
    async fn create(&self, player: &Player) -> RepoResult<Player>;

    /// Update an existing player
    async fn update(&self, player: &Player) -> RepoResult<()>;
}

// ============================================================================
// Clan Repository
// ============================================================================

#[async_trait]
pub trait ClanRepository: Send + Sync {
    /// Find clan by internal id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Clan>>;

    /// Find clan by public id within a game
    async fn find_by_public_id(&self, game_id: &str, public_id: &str) -> RepoResult<Option<Clan>>;

    /// Create a new clan
    async fn create(&self, clan: &Clan) -> RepoResult<Clan>;

    /// Update an existing clan
    async fn update(&self, clan: &Clan) -> RepoResult<()>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Find membership by id, including denied and removed rows
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Membership>>;

    /// Find the active (pending or approved) membership of a player in a clan
    async fn find_active(&self, clan_id: i64, player_id: i64) -> RepoResult<Option<Membership>>;

    /// Approved memberships of a clan, highest level first
    async fn find_approved_by_clan(&self, clan_id: i64) -> RepoResult<Vec<Membership>>;

    /// Insert a new membership
    ///
    /// Fails with `MembershipAlreadyExists` if the pair already has an
    /// active row.
    async fn create(&self, membership: &Membership) -> RepoResult<Membership>;

    /// Write a membership if its stored version still equals `membership.version`
    ///
    /// Returns the stored copy with the bumped version. Fails with
    /// `ConcurrentModification` when another writer got there first.
    async fn update(&self, membership: &Membership) -> RepoResult<Membership>;
}

// ============================================================================
// Hook Repository
// ============================================================================

#[async_trait]
pub trait HookRepository: Send + Sync {
    /// Hooks subscribed to an event type in a game
    async fn find_by_game_and_type(
        &self,
        game_id: &str,
        event_type: HookEventType,
    ) -> RepoResult<Vec<Hook>>;

    /// All hooks of a game
    async fn find_by_game(&self, game_id: &str) -> RepoResult<Vec<Hook>>;

    /// Register a new hook
    async fn create(&self, hook: &Hook) -> RepoResult<Hook>;

    /// Remove a hook by public id
    async fn delete(&self, game_id: &str, public_id: &str) -> RepoResult<()>;
}
