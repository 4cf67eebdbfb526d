//! Address enrichment pipeline.
//!
//! Turns a postal code plus caller-supplied address fragments into a complete,
//! geocoded address:
//!
//! 1. Look the postal code up in the address service and the geocoder at the
//!    same time.
//! 2. When both succeed and the address has street, city and state, merge it
//!    with the caller's street number.
//! 3. Otherwise geocode the caller's `"street, city, state"` and build the
//!    address from the caller's own fields.
//! 4. When neither path works, fail with
//!    [`StoreError::InsufficientAddressData`].
//!
//! Lookup failures of any kind (unknown code, transport, timeout) are folded
//! into the two not-found kinds and never retried.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{AddressLookup, Geocoder};
use super::{
    AddressLookupResult, CompleteAddress, Coordinate, PostalCode, RawAddress, StoreError,
    UNSPECIFIED_POSTAL_CODE,
};

/// Resolves addresses and coordinates through the lookup ports.
#[derive(Clone)]
pub struct AddressEnrichmentService {
    address_lookup: Arc<dyn AddressLookup>,
    geocoder: Arc<dyn Geocoder>,
}

impl AddressEnrichmentService {
    pub fn new(address_lookup: Arc<dyn AddressLookup>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            address_lookup,
            geocoder,
        }
    }

    /// Resolve a postal code into a normalised address.
    pub async fn resolve_address(
        &self,
        postal_code: &PostalCode,
    ) -> Result<AddressLookupResult, StoreError> {
        self.address_lookup
            .lookup_address(postal_code)
            .await
            .map_err(|error| {
                debug!(%postal_code, %error, "address lookup failed");
                StoreError::AddressNotFound {
                    postal_code: postal_code.to_string(),
                }
            })
    }

    /// Resolve a postal code or free-form address into coordinates.
    pub async fn resolve_coordinates(&self, query: &str) -> Result<Coordinate, StoreError> {
        self.geocoder.geocode(query).await.map_err(|error| {
            debug!(%query, %error, "geocoding failed");
            StoreError::CoordinateNotFound {
                query: query.to_owned(),
            }
        })
    }

    /// Produce a complete, geocoded address.
    ///
    /// `postal_code` may be absent, in which case only the caller's street,
    /// city and state are considered and the result records
    /// [`UNSPECIFIED_POSTAL_CODE`]. Such an address is fit for geocoding but
    /// not for persistence: [`NewStore`](crate::domain::NewStore) rejects the
    /// sentinel as an invalid postal code, and store creation always passes
    /// one.
    pub async fn enrich(
        &self,
        postal_code: Option<&PostalCode>,
        raw: &RawAddress,
    ) -> Result<CompleteAddress, StoreError> {
        if let Some(postal_code) = postal_code {
            match self.enrich_from_postal_code(postal_code, raw).await {
                Ok(address) => return Ok(address),
                Err(error) => {
                    debug!(%postal_code, %error, "postal code enrichment failed; trying caller address");
                }
            }
        }

        let Some((street, city, state)) = raw.street_city_state() else {
            warn!(
                postal_code = ?postal_code,
                "insufficient address data for enrichment"
            );
            return Err(StoreError::InsufficientAddressData);
        };
        let query = format!("{street}, {city}, {state}");
        let coordinate = self.resolve_coordinates(&query).await.map_err(|_| {
            warn!(%query, "caller address could not be geocoded");
            StoreError::InsufficientAddressData
        })?;

        Ok(CompleteAddress {
            street: street.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            postal_code: postal_code
                .map(ToString::to_string)
                .unwrap_or_else(|| UNSPECIFIED_POSTAL_CODE.to_owned()),
            number: raw.number.clone(),
            coordinate,
        })
    }

    async fn enrich_from_postal_code(
        &self,
        postal_code: &PostalCode,
        raw: &RawAddress,
    ) -> Result<CompleteAddress, StoreError> {
        let (address, coordinate) = tokio::join!(
            self.resolve_address(postal_code),
            self.resolve_coordinates(postal_code.as_str()),
        );
        let address = address?;
        let coordinate = coordinate?;

        if !address.is_complete() {
            return Err(StoreError::AddressNotFound {
                postal_code: postal_code.to_string(),
            });
        }

        let canonical = if address.postal_code.trim().is_empty() {
            postal_code.to_string()
        } else {
            address.postal_code
        };
        Ok(CompleteAddress {
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: canonical,
            number: raw.number.clone(),
            coordinate,
        })
    }
}
