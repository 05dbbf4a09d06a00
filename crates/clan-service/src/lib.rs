//! # clan-service
//!
//! Application layer: loads entities, runs the membership rules, persists the
//! result, and hands webhook notifications to the dispatcher once a change is
//! stored.

pub mod dto;
pub mod services;

pub use services::{
    ClanService, GameService, HookService, MembershipService, PlayerService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
