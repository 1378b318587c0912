//! Shared Diesel error mapping for the news repositories.

use tracing::debug;

use crate::domain::ports::NewsPersistenceError;

use super::pool::PoolError;

/// Map pool failures to a connection error.
pub(super) fn map_pool_error(error: PoolError) -> NewsPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            NewsPersistenceError::connection(message)
        }
    }
}

/// Map Diesel failures onto the port error variants.
///
/// Constraint violations keep their own variants so the service can tell a
/// missing referenced row apart from a malformed value.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> NewsPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            NewsPersistenceError::foreign_key_violation(info.message())
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation,
            info,
        ) => NewsPersistenceError::invalid_input(info.message()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            NewsPersistenceError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => NewsPersistenceError::query(info.message()),
        DieselError::NotFound => NewsPersistenceError::query("record not found"),
        other => NewsPersistenceError::query(other.to_string()),
    }
}
