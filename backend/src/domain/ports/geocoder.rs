//! Driven port for turning a postal code or free-form address into
//! coordinates.

use async_trait::async_trait;

use crate::domain::Coordinate;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by geocoding adapters.
    pub enum GeocodingError {
        /// The service answered successfully with zero results.
        NoResults { query: String } =>
            "geocoder returned no results for {query:?}",
        /// The service answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "geocoder rejected request with status {status}: {message}",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "geocoder transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "geocoder timed out: {message}",
        /// The response could not be decoded.
        Decode { message: String } =>
            "geocoder response decode failed: {message}",
        /// No geocoder is configured for this process.
        Unavailable =>
            "geocoding is not configured",
    }
}

/// Port for the external geocoding service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `query` (a postal code or `"street, city, state"`) into
    /// coordinates.
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodingError>;
}

/// Fixture geocoder used when no geocoding credentials are configured.
///
/// Every query fails with [`GeocodingError::Unavailable`], so enrichment and
/// nearby search report coordinates as not found.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGeocoder;

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn geocode(&self, _query: &str) -> Result<Coordinate, GeocodingError> {
        Err(GeocodingError::unavailable())
    }
}
