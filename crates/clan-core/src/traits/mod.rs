//! Repository traits

mod repositories;

pub use repositories::{
    ClanRepository, GameRepository, HookRepository, MembershipRepository, PlayerRepository,
    RepoResult,
};
