//! Proximity search over persisted stores.

use super::{Coordinate, Store, StoreError};

/// Radius applied when the caller does not provide one.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Accept a search radius only when it is positive and finite.
///
/// # Errors
/// Returns [`StoreError::InvalidDistance`] for zero, negative, NaN or
/// infinite values.
pub fn validate_radius_km(radius_km: f64) -> Result<f64, StoreError> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(radius_km)
    } else {
        Err(StoreError::InvalidDistance { value: radius_km })
    }
}

/// A store paired with its distance from the search origin.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStore {
    pub store: Store,
    pub distance_km: f64,
}

/// Rank `stores` by distance from `origin`, keeping those within
/// `max_distance_km` (inclusive).
///
/// The sort is stable: stores at equal distance keep their input order. No
/// match yields an empty vector.
pub fn find_nearby(
    origin: Coordinate,
    stores: impl IntoIterator<Item = Store>,
    max_distance_km: f64,
) -> Vec<NearbyStore> {
    let mut nearby: Vec<NearbyStore> = stores
        .into_iter()
        .map(|store| {
            let distance_km = origin.distance_km(&store.address().coordinate());
            NearbyStore { store, distance_km }
        })
        .filter(|candidate| candidate.distance_km <= max_distance_km)
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}
