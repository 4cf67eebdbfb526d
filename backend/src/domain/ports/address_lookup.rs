//! Driven port for resolving a postal code into a street address.

use async_trait::async_trait;

use crate::domain::{AddressLookupResult, PostalCode};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by address lookup adapters.
    pub enum AddressLookupError {
        /// The service reports the postal code as invalid or unknown.
        NotFound { postal_code: String } =>
            "postal code {postal_code} is unknown to the address lookup service",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "address lookup transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "address lookup timed out: {message}",
        /// The response could not be decoded.
        Decode { message: String } =>
            "address lookup response decode failed: {message}",
    }
}

/// Port for the external address lookup service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve `postal_code` into a normalised address.
    ///
    /// No retries happen at this layer; the caller decides how to proceed.
    async fn lookup_address(
        &self,
        postal_code: &PostalCode,
    ) -> Result<AddressLookupResult, AddressLookupError>;
}
