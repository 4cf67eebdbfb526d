//! Driving port for store reads and proximity search.

use async_trait::async_trait;

use crate::domain::{Error, NearbyStore, PostalCode, Store, StoreId};

/// Request for stores around a postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStoresRequest {
    pub postal_code: PostalCode,
    /// Radius override in kilometres; the service default applies when
    /// absent.
    pub max_distance_km: Option<f64>,
}

/// Driving port for store read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreQuery: Send + Sync {
    /// All stores in storage order.
    async fn list_stores(&self) -> Result<Vec<Store>, Error>;

    async fn get_store(&self, id: &StoreId) -> Result<Store, Error>;

    /// Stores within the radius of the postal code, nearest first. An empty
    /// list is a successful answer.
    async fn find_nearby_stores(
        &self,
        request: NearbyStoresRequest,
    ) -> Result<Vec<NearbyStore>, Error>;
}
