//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `STORE_LOCATOR_*` environment variables and
//! configuration files; every field is optional and the accessors supply the
//! defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_MAX_DISTANCE_KM, StoreError, validate_radius_km};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br/";
const DEFAULT_OPENCAGE_URL: &str = "https://api.opencagedata.com/";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Settings for the store locator service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STORE_LOCATOR")]
pub struct StoreLocatorSettings {
    /// TCP port the HTTP server listens on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without it the service runs on fixture
    /// ports that persist nothing.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Base URL of the ViaCEP postal code service.
    pub viacep_url: Option<String>,
    /// Base URL of the OpenCage geocoding API.
    pub opencage_url: Option<String>,
    /// OpenCage API key. Geocoding is unavailable without it.
    pub opencage_api_key: Option<String>,
    /// Timeout applied to every external lookup, in milliseconds.
    pub lookup_timeout_ms: Option<u64>,
    /// Radius used by nearby search when a request carries none.
    pub nearby_radius_km: Option<f64>,
}

impl StoreLocatorSettings {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address the server binds to on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }

    pub fn viacep_url(&self) -> &str {
        self.viacep_url.as_deref().unwrap_or(DEFAULT_VIACEP_URL)
    }

    pub fn opencage_url(&self) -> &str {
        self.opencage_url.as_deref().unwrap_or(DEFAULT_OPENCAGE_URL)
    }

    /// The API key, treating a blank value as absent.
    pub fn opencage_api_key(&self) -> Option<&str> {
        self.opencage_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms.unwrap_or(DEFAULT_LOOKUP_TIMEOUT_MS))
    }

    /// Default nearby-search radius.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidDistance`] when the configured radius is
    /// zero, negative or not finite.
    pub fn nearby_radius_km(&self) -> Result<f64, StoreError> {
        self.nearby_radius_km
            .map_or(Ok(DEFAULT_MAX_DISTANCE_KM), validate_radius_km)
    }
}
