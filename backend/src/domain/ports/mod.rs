//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod address_lookup;
mod geocoder;
mod store_command;
mod store_query;
mod store_repository;

#[cfg(test)]
pub use address_lookup::MockAddressLookup;
pub use address_lookup::{AddressLookup, AddressLookupError};
#[cfg(test)]
pub use geocoder::MockGeocoder;
pub use geocoder::{FixtureGeocoder, Geocoder, GeocodingError};
#[cfg(test)]
pub use store_command::MockStoreCommand;
pub use store_command::{CreateStoreRequest, StoreCommand};
#[cfg(test)]
pub use store_query::MockStoreQuery;
pub use store_query::{NearbyStoresRequest, StoreQuery};
#[cfg(test)]
pub use store_repository::MockStoreRepository;
pub use store_repository::{FixtureStoreRepository, StoreRepository, StoreRepositoryError};
