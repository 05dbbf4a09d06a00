//! # clan-hooks
//!
//! Asynchronous webhook delivery. Services hand events to the
//! [`HookDispatcher`] after their state change is committed; a worker pool
//! POSTs the JSON payload to every hook registered for the game and event type.

pub mod dispatcher;
pub mod error;

pub use dispatcher::{DispatcherStats, HookDispatcher, HookDispatcherConfig};
pub use error::DeliveryError;
