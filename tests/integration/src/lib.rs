//! Integration test utilities for the clan service
//!
//! This crate provides a service stack wired to an isolated store, a local
//! webhook receiver, and fixtures for end-to-end membership scenarios.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
