//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in clan-core.
//! Each repository handles database operations for a specific domain entity.

mod clan;
mod error;
mod game;
mod hook;
mod membership;
mod player;

pub use clan::PgClanRepository;
pub use game::PgGameRepository;
pub use hook::PgHookRepository;
pub use membership::PgMembershipRepository;
pub use player::PgPlayerRepository;
