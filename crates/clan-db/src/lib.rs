//! # clan-db
//!
//! Entity store implementing the repository traits of `clan-core`.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx, with connection pool management and a
//!   runtime migration runner over the workspace `migrations/` directory
//! - Database models with SQLx `FromRow` derives and entity mappers
//! - [`MemoryStore`], an in-process store with the same constraints, for
//!   isolated runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clan_db::{create_pool, run_migrations, DatabaseConfig, PgMembershipRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let memberships = PgMembershipRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{
    create_pool, run_migrations, run_migrations_from, DatabaseConfig, PgPool, MIGRATIONS_DIR,
};
pub use repositories::{
    PgClanRepository, PgGameRepository, PgHookRepository, PgMembershipRepository,
    PgPlayerRepository,
};
