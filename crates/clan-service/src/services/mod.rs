//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and exposes one use case per
//! method. State changes are written first; hook events are dispatched after
//! the write succeeds.

pub mod clan;
pub mod context;
pub mod error;
pub mod game;
pub mod hook;
pub mod membership;
pub mod player;

mod lookup;

pub use clan::ClanService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use game::GameService;
pub use hook::HookService;
pub use membership::MembershipService;
pub use player::PlayerService;

#[cfg(test)]
pub(crate) mod test_support;
