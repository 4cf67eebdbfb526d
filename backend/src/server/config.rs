//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use store_locator::domain::DEFAULT_MAX_DISTANCE_KM;
use store_locator::outbound::persistence::DbPool;
use url::Url;

/// Endpoints and credentials for the external lookup services.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub(crate) viacep_url: Url,
    pub(crate) opencage_url: Url,
    pub(crate) opencage_api_key: Option<String>,
    pub(crate) timeout: Duration,
}

impl LookupConfig {
    #[must_use]
    pub fn new(viacep_url: Url, opencage_url: Url, timeout: Duration) -> Self {
        Self {
            viacep_url,
            opencage_url,
            opencage_api_key: None,
            timeout,
        }
    }

    /// Enable OpenCage geocoding with the given key.
    #[must_use]
    pub fn with_opencage_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.opencage_api_key = Some(api_key.into());
        self
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) lookup: LookupConfig,
    pub(crate) nearby_radius_km: f64,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, lookup: LookupConfig) -> Self {
        Self {
            bind_addr,
            lookup,
            nearby_radius_km: DEFAULT_MAX_DISTANCE_KM,
            db_pool: None,
        }
    }

    /// Attach a database pool; without one the store ports run on fixtures.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Radius applied to nearby searches that carry no override.
    #[must_use]
    pub fn with_nearby_radius_km(mut self, radius_km: f64) -> Self {
        self.nearby_radius_km = radius_km;
        self
    }
}
