//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::MembershipState;

/// Coarse classification of a [`DomainError`]
///
/// Callers map each kind to a transport status; the kinds themselves are
/// the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    InvalidState,
    ConstraintViolation,
    Conflict,
    Validation,
    Internal,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Game was not found with id: {0}")]
    GameNotFound(String),

    #[error("Player was not found with id: {0}")]
    PlayerNotFound(String),

    #[error("Clan was not found with id: {0}")]
    ClanNotFound(String),

    #[error("Membership was not found: {0}")]
    MembershipNotFound(String),

    #[error("Hook was not found with id: {0}")]
    HookNotFound(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Player cannot {action}: level {required} is required")]
    InsufficientLevel { action: &'static str, required: i32 },

    #[error("Player cannot {action}: a level offset of {required} over the target is required")]
    InsufficientLevelOffset { action: &'static str, required: i32 },

    #[error("Only the clan owner can {0}")]
    NotClanOwner(&'static str),

    #[error("Player cannot remove this membership")]
    CannotRemoveMembership,

    // =========================================================================
    // State Errors
    // =========================================================================
    #[error("Game does not allow applications")]
    ApplicationsNotAllowed,

    #[error("Player already has an active membership in this clan")]
    MembershipAlreadyExists,

    #[error("The clan owner cannot be given a membership in their own clan")]
    OwnerCannotJoin,

    #[error("Cannot {action} a membership that is {from}")]
    InvalidTransition {
        from: MembershipState,
        action: &'static str,
    },

    #[error("Membership is already at the maximum level ({0})")]
    AlreadyAtMaxLevel(i32),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Unknown hook event type: {0}")]
    UnknownHookEventType(i32),

    // =========================================================================
    // Store Errors
    // =========================================================================
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Concurrent modification of {0}")]
    ConcurrentModification(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::GameNotFound(_)
            | Self::PlayerNotFound(_)
            | Self::ClanNotFound(_)
            | Self::MembershipNotFound(_)
            | Self::HookNotFound(_) => ErrorKind::NotFound,

            Self::InsufficientLevel { .. }
            | Self::InsufficientLevelOffset { .. }
            | Self::NotClanOwner(_)
            | Self::CannotRemoveMembership => ErrorKind::Forbidden,

            Self::ApplicationsNotAllowed
            | Self::MembershipAlreadyExists
            | Self::OwnerCannotJoin
            | Self::InvalidTransition { .. }
            | Self::AlreadyAtMaxLevel(_) => ErrorKind::InvalidState,

            Self::ValidationError(_)
            | Self::InvalidAction(_)
            | Self::UnknownHookEventType(_) => ErrorKind::Validation,

            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::ConcurrentModification(_) => ErrorKind::Conflict,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::PlayerNotFound(_) => "UNKNOWN_PLAYER",
            Self::ClanNotFound(_) => "UNKNOWN_CLAN",
            Self::MembershipNotFound(_) => "UNKNOWN_MEMBERSHIP",
            Self::HookNotFound(_) => "UNKNOWN_HOOK",

            // Authorization
            Self::InsufficientLevel { .. } => "INSUFFICIENT_LEVEL",
            Self::InsufficientLevelOffset { .. } => "INSUFFICIENT_LEVEL_OFFSET",
            Self::NotClanOwner(_) => "NOT_CLAN_OWNER",
            Self::CannotRemoveMembership => "CANNOT_REMOVE_MEMBERSHIP",

            // State
            Self::ApplicationsNotAllowed => "APPLICATIONS_NOT_ALLOWED",
            Self::MembershipAlreadyExists => "MEMBERSHIP_ALREADY_EXISTS",
            Self::OwnerCannotJoin => "OWNER_CANNOT_JOIN",
            Self::InvalidTransition { .. } => "INVALID_MEMBERSHIP_STATE",
            Self::AlreadyAtMaxLevel(_) => "ALREADY_AT_MAX_LEVEL",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidAction(_) => "INVALID_ACTION",
            Self::UnknownHookEventType(_) => "UNKNOWN_HOOK_EVENT_TYPE",

            // Store
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::ConcurrentModification(_) => "CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        self.kind() == ErrorKind::Forbidden
    }

    /// Check if this is an invalid state transition
    pub fn is_invalid_state(&self) -> bool {
        self.kind() == ErrorKind::InvalidState
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is a lost concurrent-mutation race
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}
