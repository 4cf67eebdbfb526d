//! In-memory port doubles shared by the store integration suites.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use store_locator::domain::ports::{
    AddressLookup, AddressLookupError, Geocoder, GeocodingError, StoreRepository,
    StoreRepositoryError,
};
use store_locator::domain::{
    AddressEnrichmentService, AddressLookupResult, Coordinate, NewStore, PostalCode, Store,
    StoreId, StoreService,
};

/// A well-known location used to script the lookup doubles.
pub struct Place {
    pub postal_code: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub coordinate: Coordinate,
}

pub fn place(name: &str) -> Place {
    match name {
        "Paulista" => Place {
            postal_code: "01310-100",
            street: "Avenida Paulista",
            city: "São Paulo",
            state: "SP",
            coordinate: Coordinate::new(-23.5614, -46.6559),
        },
        "Sé" => Place {
            postal_code: "01001-000",
            street: "Praça da Sé",
            city: "São Paulo",
            state: "SP",
            coordinate: Coordinate::new(-23.5503, -46.6340),
        },
        "Campinas" => Place {
            postal_code: "13010-000",
            street: "Rua Barão de Jaguara",
            city: "Campinas",
            state: "SP",
            coordinate: Coordinate::new(-22.9056, -47.0608),
        },
        other => panic!("unknown place {other}"),
    }
}

/// Address lookup answering from a table keyed by canonical postal code.
#[derive(Default)]
pub struct ScriptedAddressLookup {
    addresses: Mutex<HashMap<String, AddressLookupResult>>,
    calls: AtomicUsize,
}

impl ScriptedAddressLookup {
    pub fn knows(&self, postal_code: &str, street: &str, city: &str, state: &str) {
        let canonical = PostalCode::new(postal_code).expect("valid postal code");
        self.addresses.lock().expect("addresses lock").insert(
            canonical.to_string(),
            AddressLookupResult {
                street: street.to_owned(),
                neighborhood: String::new(),
                city: city.to_owned(),
                state: state.to_owned(),
                postal_code: canonical.to_string(),
            },
        );
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressLookup for ScriptedAddressLookup {
    async fn lookup_address(
        &self,
        postal_code: &PostalCode,
    ) -> Result<AddressLookupResult, AddressLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.addresses
            .lock()
            .expect("addresses lock")
            .get(postal_code.as_str())
            .cloned()
            .ok_or_else(|| AddressLookupError::not_found(postal_code.as_str()))
    }
}

/// Geocoder answering from a table keyed by the exact query text.
#[derive(Default)]
pub struct ScriptedGeocoder {
    coordinates: Mutex<HashMap<String, Coordinate>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedGeocoder {
    pub fn knows(&self, query: &str, coordinate: Coordinate) {
        self.coordinates
            .lock()
            .expect("coordinates lock")
            .insert(query.to_owned(), coordinate);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl Geocoder for ScriptedGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodingError> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_owned());
        self.coordinates
            .lock()
            .expect("coordinates lock")
            .get(query)
            .copied()
            .ok_or_else(|| GeocodingError::no_results(query))
    }
}

/// Store repository holding rows in insertion order, unique by postal code.
#[derive(Default)]
pub struct InMemoryStoreRepository {
    stores: Mutex<Vec<Store>>,
}

impl InMemoryStoreRepository {
    pub fn len(&self) -> usize {
        self.stores.lock().expect("stores lock").len()
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn insert(&self, store: &NewStore) -> Result<Store, StoreRepositoryError> {
        let mut stores = self.stores.lock().expect("stores lock");
        let postal_code = store.address().postal_code();
        if stores
            .iter()
            .any(|existing| existing.address().postal_code() == postal_code)
        {
            return Err(StoreRepositoryError::duplicate_postal_code(
                postal_code.as_str(),
            ));
        }
        let stored = store.clone().with_id(StoreId::random());
        stores.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Store>, StoreRepositoryError> {
        Ok(self.stores.lock().expect("stores lock").clone())
    }

    async fn find_by_id(&self, id: &StoreId) -> Result<Option<Store>, StoreRepositoryError> {
        Ok(self
            .stores
            .lock()
            .expect("stores lock")
            .iter()
            .find(|store| store.id() == *id)
            .cloned())
    }

    async fn find_by_postal_code(
        &self,
        postal_code: &PostalCode,
    ) -> Result<Option<Store>, StoreRepositoryError> {
        Ok(self
            .stores
            .lock()
            .expect("stores lock")
            .iter()
            .find(|store| store.address().postal_code() == postal_code)
            .cloned())
    }

    async fn delete(&self, id: &StoreId) -> Result<bool, StoreRepositoryError> {
        let mut stores = self.stores.lock().expect("stores lock");
        let before = stores.len();
        stores.retain(|store| store.id() != *id);
        Ok(stores.len() < before)
    }
}

/// The three doubles wired into a store service.
#[derive(Clone, Default)]
pub struct StoreDoubles {
    pub lookup: Arc<ScriptedAddressLookup>,
    pub geocoder: Arc<ScriptedGeocoder>,
    pub repository: Arc<InMemoryStoreRepository>,
}

impl StoreDoubles {
    pub fn enrichment(&self) -> AddressEnrichmentService {
        AddressEnrichmentService::new(self.lookup.clone(), self.geocoder.clone())
    }

    pub fn service(&self) -> StoreService<InMemoryStoreRepository> {
        StoreService::new(self.repository.clone(), self.enrichment())
    }
}
