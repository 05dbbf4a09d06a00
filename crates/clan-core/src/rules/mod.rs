//! Membership rule engine

mod membership;

pub use membership::{LevelChange, MembershipRules};
