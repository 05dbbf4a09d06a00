//! # clan-core
//!
//! Domain layer containing entities, value objects, the membership rule engine,
//! hook event payloads, and repository traits.
//! This crate has zero dependencies on infrastructure (database, HTTP client, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod rules;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Clan, Game, GameSettings, Hook, Membership, MembershipState, Player};
pub use error::{DomainError, ErrorKind};
pub use events::{ClanHookPayload, GameHookPayload, MembershipHookPayload, PlayerHookPayload};
pub use rules::{LevelChange, MembershipRules};
pub use traits::{
    ClanRepository, GameRepository, HookRepository, MembershipRepository, PlayerRepository,
    RepoResult,
};
pub use value_objects::{ApprovalAction, Authority, HookEventType, LevelAction, MAX_PUBLIC_ID_LEN};
