//! Database models - SQLx-compatible structs for PostgreSQL tables

mod clan;
mod game;
mod hook;
mod membership;
mod player;

pub use clan::ClanModel;
pub use game::GameModel;
pub use hook::HookModel;
pub use membership::MembershipModel;
pub use player::PlayerModel;
