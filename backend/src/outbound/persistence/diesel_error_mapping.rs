//! Diesel and pool error mapping for the store repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StoreRepositoryError;

use super::pool::PoolError;

/// Constraint guarding one store per postal code.
pub(crate) const POSTAL_CODE_UNIQUE_CONSTRAINT: &str = "stores_postal_code_key";

pub(crate) fn map_pool_error(error: PoolError) -> StoreRepositoryError {
    StoreRepositoryError::connection(error.message())
}

/// Map Diesel errors raised by reads and deletes.
pub(crate) fn map_diesel_error(error: DieselError) -> StoreRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => StoreRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => StoreRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreRepositoryError::connection("database connection error")
        }
        _ => StoreRepositoryError::query("database error"),
    }
}

/// Map Diesel errors raised by an insert, recognising the postal code
/// uniqueness constraint.
pub(crate) fn map_insert_error(error: DieselError, postal_code: &str) -> StoreRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        let on_postal_code = info
            .constraint_name()
            .is_none_or(|name| name == POSTAL_CODE_UNIQUE_CONSTRAINT);
        if on_postal_code {
            debug!(postal_code, "unique postal code constraint rejected insert");
            return StoreRepositoryError::duplicate_postal_code(postal_code);
        }
    }
    map_diesel_error(error)
}
