//! Failure taxonomy for store enrichment, persistence and search.
//!
//! Every store operation fails with a [`StoreError`]. The conversion into the
//! transport-agnostic [`Error`] is the single place where a failure kind is
//! assigned its error code.

use serde_json::json;
use thiserror::Error as ThisError;

use super::{Error, StoreId, StoreValidationError};

/// Store domain failures.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum StoreError {
    /// The address lookup service does not know the postal code or could not
    /// be reached.
    #[error("address not found for postal code {postal_code}")]
    AddressNotFound { postal_code: String },
    /// The geocoder returned no coordinates for the query or could not be
    /// reached.
    #[error("coordinates not found for {query:?}")]
    CoordinateNotFound { query: String },
    /// Neither the postal code nor the caller's street, city and state could
    /// be resolved.
    #[error(
        "insufficient address data: provide a resolvable postal code or street, city and state"
    )]
    InsufficientAddressData,
    #[error("a store with postal code {postal_code} already exists")]
    DuplicatePostalCode { postal_code: String },
    #[error("store {id} not found")]
    StoreNotFound { id: StoreId },
    #[error("invalid store: {0}")]
    InvalidStore(#[from] StoreValidationError),
    /// A search radius that is zero, negative or not finite.
    #[error("search radius must be a positive number of kilometres, got {value}")]
    InvalidDistance { value: f64 },
    #[error("store repository unavailable: {message}")]
    RepositoryUnavailable { message: String },
    #[error("store repository error: {message}")]
    Repository { message: String },
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        let message = value.to_string();
        match value {
            StoreError::AddressNotFound { postal_code } => {
                Error::not_found(message).with_details(json!({
                    "code": "address_not_found",
                    "postalCode": postal_code,
                }))
            }
            StoreError::CoordinateNotFound { query } => {
                Error::not_found(message).with_details(json!({
                    "code": "coordinate_not_found",
                    "query": query,
                }))
            }
            StoreError::StoreNotFound { id } => Error::not_found(message).with_details(json!({
                "code": "store_not_found",
                "id": id.to_string(),
            })),
            StoreError::InsufficientAddressData => Error::invalid_request(message)
                .with_details(json!({ "code": "insufficient_address_data" })),
            StoreError::InvalidDistance { value } => {
                Error::invalid_request(message).with_details(json!({
                    "code": "invalid_distance",
                    "field": "maxDistanceKm",
                    "value": value.to_string(),
                }))
            }
            StoreError::InvalidStore(_) => {
                Error::invalid_request(message).with_details(json!({ "code": "invalid_store" }))
            }
            StoreError::DuplicatePostalCode { postal_code } => {
                Error::conflict(message).with_details(json!({
                    "code": "duplicate_postal_code",
                    "postalCode": postal_code,
                }))
            }
            StoreError::RepositoryUnavailable { .. } => Error::service_unavailable(message),
            StoreError::Repository { .. } => Error::internal(message),
        }
    }
}
