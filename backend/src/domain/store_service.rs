//! Store domain service.
//!
//! Implements both driving ports on top of the store repository and the
//! enrichment pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    CreateStoreRequest, NearbyStoresRequest, StoreCommand, StoreQuery, StoreRepository,
    StoreRepositoryError,
};
use crate::domain::{
    AddressEnrichmentService, DEFAULT_MAX_DISTANCE_KM, Error, NearbyStore, NewStore, Store,
    StoreDraft, StoreError, StoreId, StoreName, find_nearby, validate_radius_km,
};

fn map_repository_error(error: StoreRepositoryError) -> StoreError {
    match error {
        StoreRepositoryError::Connection { message } => {
            StoreError::RepositoryUnavailable { message }
        }
        StoreRepositoryError::Query { message } => StoreError::Repository { message },
        StoreRepositoryError::DuplicatePostalCode { postal_code } => {
            StoreError::DuplicatePostalCode { postal_code }
        }
    }
}

/// Store service implementing [`StoreCommand`] and [`StoreQuery`].
#[derive(Clone)]
pub struct StoreService<R> {
    store_repo: Arc<R>,
    enrichment: AddressEnrichmentService,
    default_radius_km: f64,
}

impl<R> StoreService<R> {
    /// Create a service using [`DEFAULT_MAX_DISTANCE_KM`] for nearby search.
    pub fn new(store_repo: Arc<R>, enrichment: AddressEnrichmentService) -> Self {
        Self {
            store_repo,
            enrichment,
            default_radius_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }

    /// Replace the radius used when a search carries no override.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidDistance`] unless the radius is positive
    /// and finite.
    pub fn with_default_radius_km(mut self, default_radius_km: f64) -> Result<Self, StoreError> {
        self.default_radius_km = validate_radius_km(default_radius_km)?;
        Ok(self)
    }
}

impl<R> StoreService<R>
where
    R: StoreRepository,
{
    async fn create(&self, request: CreateStoreRequest) -> Result<Store, StoreError> {
        let CreateStoreRequest {
            name,
            postal_code,
            address,
        } = request;
        // Reject short names before any lookup.
        StoreName::new(name.as_str())?;

        let complete = self.enrichment.enrich(Some(&postal_code), &address).await?;
        let new_store = NewStore::new(StoreDraft {
            name,
            address: complete,
        })?;

        let canonical = new_store.address().postal_code();
        let existing = self
            .store_repo
            .find_by_postal_code(canonical)
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            warn!(postal_code = %canonical, "store already registered for postal code");
            return Err(StoreError::DuplicatePostalCode {
                postal_code: canonical.to_string(),
            });
        }

        let store = self
            .store_repo
            .insert(&new_store)
            .await
            .map_err(map_repository_error)?;
        info!(
            store_id = %store.id(),
            postal_code = %store.address().postal_code(),
            "store created"
        );
        Ok(store)
    }

    async fn delete(&self, id: &StoreId) -> Result<(), StoreError> {
        let removed = self
            .store_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            warn!(store_id = %id, "delete requested for unknown store");
            return Err(StoreError::StoreNotFound { id: *id });
        }
        info!(store_id = %id, "store deleted");
        Ok(())
    }

    async fn get(&self, id: &StoreId) -> Result<Store, StoreError> {
        let store = self
            .store_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        match store {
            Some(store) => {
                info!(store_id = %id, "store found");
                Ok(store)
            }
            None => {
                warn!(store_id = %id, "store not found");
                Err(StoreError::StoreNotFound { id: *id })
            }
        }
    }

    async fn nearby(
        &self,
        request: &NearbyStoresRequest,
        radius_km: f64,
    ) -> Result<Vec<NearbyStore>, StoreError> {
        let origin = self
            .enrichment
            .resolve_coordinates(request.postal_code.as_str())
            .await?;
        let stores = self
            .store_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        let scanned = stores.len();

        let nearby = find_nearby(origin, stores, radius_km);
        info!(
            postal_code = %request.postal_code,
            radius_km,
            scanned,
            matched = nearby.len(),
            "nearby search completed"
        );
        Ok(nearby)
    }
}

#[async_trait]
impl<R> StoreCommand for StoreService<R>
where
    R: StoreRepository,
{
    async fn create_store(&self, request: CreateStoreRequest) -> Result<Store, Error> {
        self.create(request).await.map_err(Error::from)
    }

    async fn delete_store(&self, id: &StoreId) -> Result<(), Error> {
        self.delete(id).await.map_err(Error::from)
    }
}

#[async_trait]
impl<R> StoreQuery for StoreService<R>
where
    R: StoreRepository,
{
    async fn list_stores(&self) -> Result<Vec<Store>, Error> {
        let stores = self
            .store_repo
            .list_all()
            .await
            .map_err(|err| Error::from(map_repository_error(err)))?;
        info!(total = stores.len(), "stores listed");
        Ok(stores)
    }

    async fn get_store(&self, id: &StoreId) -> Result<Store, Error> {
        self.get(id).await.map_err(Error::from)
    }

    async fn find_nearby_stores(
        &self,
        request: NearbyStoresRequest,
    ) -> Result<Vec<NearbyStore>, Error> {
        let radius_km = request
            .max_distance_km
            .map_or(Ok(self.default_radius_km), validate_radius_km)
            .map_err(Error::from)?;
        self.nearby(&request, radius_km).await.map_err(Error::from)
    }
}

#[cfg(test)]
#[path = "store_service_tests.rs"]
mod tests;
