//! Hook delivery errors

use clan_core::DomainError;
use thiserror::Error;

/// Reasons a hook event was not delivered
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("hook lookup failed: {0}")]
    Lookup(#[from] DomainError),

    #[error("hook queue is full")]
    QueueFull,

    #[error("hook queue is closed")]
    QueueClosed,
}
