//! Driving port for store mutations.

use async_trait::async_trait;

use crate::domain::{Error, PostalCode, RawAddress, Store, StoreId};

/// Request to register a new store.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStoreRequest {
    pub name: String,
    pub postal_code: PostalCode,
    /// Street number plus optional street, city and state used when the
    /// postal code cannot be resolved.
    pub address: RawAddress,
}

/// Driving port for store write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreCommand: Send + Sync {
    /// Enrich the address, enforce postal code uniqueness and persist the
    /// store.
    ///
    /// Nothing is written unless enrichment succeeds completely.
    async fn create_store(&self, request: CreateStoreRequest) -> Result<Store, Error>;

    /// Delete a store by identifier, failing with not found when absent.
    async fn delete_store(&self, id: &StoreId) -> Result<(), Error>;
}
