//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised with mocks and without I/O.

use std::sync::Arc;

use crate::domain::ports::{StoreCommand, StoreQuery};

/// Dependency bundle for the store handlers.
#[derive(Clone)]
pub struct HttpState {
    pub stores: Arc<dyn StoreCommand>,
    pub stores_query: Arc<dyn StoreQuery>,
}

impl HttpState {
    pub fn new(stores: Arc<dyn StoreCommand>, stores_query: Arc<dyn StoreQuery>) -> Self {
        Self {
            stores,
            stores_query,
        }
    }
}
