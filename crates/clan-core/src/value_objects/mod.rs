//! Value objects - immutable types that represent domain concepts

mod actions;
mod authority;
mod hook_event_type;

pub use actions::{ApprovalAction, LevelAction};
pub use authority::Authority;
pub use hook_event_type::HookEventType;

/// Maximum stored length of a game-scoped public identifier
pub const MAX_PUBLIC_ID_LEN: usize = 255;
