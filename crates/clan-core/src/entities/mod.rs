//! Domain entities - core business objects

mod clan;
mod game;
mod hook;
mod membership;
mod player;

pub use clan::Clan;
pub use game::{Game, GameSettings};
pub use hook::Hook;
pub use membership::{Membership, MembershipState};
pub use player::Player;
