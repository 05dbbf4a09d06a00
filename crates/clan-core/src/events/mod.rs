//! Hook events - payloads posted when domain state changes

mod hook_event;

pub use hook_event::{ClanHookPayload, GameHookPayload, MembershipHookPayload, PlayerHookPayload};
