//! Driven port for store persistence.

use async_trait::async_trait;

use crate::domain::{NewStore, PostalCode, Store, StoreId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by store repository adapters.
    pub enum StoreRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "store repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "store repository query failed: {message}",
        /// The unique postal code constraint rejected an insert.
        DuplicatePostalCode { postal_code: String } =>
            "store with postal code {postal_code} already exists",
    }
}

/// Port for reading and writing stores.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Persist a store and return it with its assigned identifier.
    ///
    /// Adapters must enforce postal code uniqueness and report a conflicting
    /// insert as [`StoreRepositoryError::DuplicatePostalCode`].
    async fn insert(&self, store: &NewStore) -> Result<Store, StoreRepositoryError>;

    /// All stores in storage order.
    async fn list_all(&self) -> Result<Vec<Store>, StoreRepositoryError>;

    async fn find_by_id(&self, id: &StoreId) -> Result<Option<Store>, StoreRepositoryError>;

    async fn find_by_postal_code(
        &self,
        postal_code: &PostalCode,
    ) -> Result<Option<Store>, StoreRepositoryError>;

    /// Delete a store, returning whether a row was removed.
    async fn delete(&self, id: &StoreId) -> Result<bool, StoreRepositoryError>;
}

/// Fixture repository for running without a database; it persists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStoreRepository;

#[async_trait]
impl StoreRepository for FixtureStoreRepository {
    async fn insert(&self, store: &NewStore) -> Result<Store, StoreRepositoryError> {
        Ok(store.clone().with_id(StoreId::random()))
    }

    async fn list_all(&self) -> Result<Vec<Store>, StoreRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &StoreId) -> Result<Option<Store>, StoreRepositoryError> {
        Ok(None)
    }

    async fn find_by_postal_code(
        &self,
        _postal_code: &PostalCode,
    ) -> Result<Option<Store>, StoreRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: &StoreId) -> Result<bool, StoreRepositoryError> {
        Ok(false)
    }
}
