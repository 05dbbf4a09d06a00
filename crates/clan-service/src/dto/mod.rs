//! Data transfer objects
//!
//! - Request DTOs with validation for service inputs
//! - Response DTOs for service outputs
//! - Mappers from domain entities to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ApplyForMembershipRequest, CreateClanRequest, CreateGameRequest, CreateHookRequest,
    CreatePlayerRequest, InvitationDecisionRequest, InviteForMembershipRequest,
    MembershipActionRequest, UpdateClanRequest, UpdateGameRequest, UpdatePlayerRequest,
};

pub use responses::{
    ClanMemberResponse, ClanResponse, GameResponse, HookResponse, MembershipResponse,
    PlayerResponse,
};

pub use mappers::{ClanWithOwner, MembershipWithParties};
