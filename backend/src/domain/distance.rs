//! Great-circle distance between geographic coordinates.
//!
//! Distances use the spherical law of cosines on a sphere with the mean Earth
//! radius. Results are in kilometres.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use store_locator::domain::Coordinate;
///
/// let sao_paulo = Coordinate::new(-23.5505, -46.6333);
/// assert!(sao_paulo.distance_km(&sao_paulo) < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside their degree ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Distance in kilometres to `other`.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Great-circle distance in kilometres between two points given in degrees.
///
/// The cosine term is clamped to `[-1, 1]` so rounding near identical or
/// antipodal points cannot yield NaN.
///
/// # Examples
/// ```
/// use store_locator::domain::distance_km;
///
/// let km = distance_km(-23.5505, -46.6333, -22.9068, -43.1729);
/// assert!((355.0..=362.0).contains(&km));
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let delta_lambda = (lon1 - lon2).to_radians();

    let cosine = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
    cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}
