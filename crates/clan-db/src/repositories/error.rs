//! Error handling utilities for repositories

use clan_core::error::DomainError;
use sqlx::Error as SqlxError;

/// PostgreSQL `string_data_right_truncation`
const STRING_TOO_LONG: &str = "22001";

/// Convert SQLx error to DomainError
///
/// Store-level constraint failures (uniqueness, value too long, checks,
/// foreign keys) become `ConstraintViolation`; everything else is a
/// `DatabaseError`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        let is_constraint = db_err.is_unique_violation()
            || db_err.is_check_violation()
            || db_err.is_foreign_key_violation()
            || db_err.code().as_deref() == Some(STRING_TOO_LONG);
        if is_constraint {
            return DomainError::ConstraintViolation(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_infrastructure() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));

        let err = map_unique_violation(SqlxError::PoolTimedOut, || {
            DomainError::MembershipAlreadyExists
        });
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
