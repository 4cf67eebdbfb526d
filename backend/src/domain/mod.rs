//! Domain primitives, services and ports.
//!
//! Purpose: keep store enrichment, proximity search and their failure
//! taxonomy free of HTTP and database concerns. Adapters reach the domain
//! through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - StoreError: store failure taxonomy mapped onto `Error`.
//! - Coordinate / distance_km: great-circle distance calculator.
//! - PostalCode, AddressLookupResult, RawAddress, CompleteAddress: address
//!   value objects.
//! - Store, NewStore, StoreId: store entity.
//! - AddressEnrichmentService: enrichment pipeline with fallback.
//! - find_nearby / NearbyStore: proximity search engine.
//! - StoreService: implementation of the store driving ports.

pub mod address;
pub mod distance;
pub mod enrichment;
pub mod error;
pub mod ports;
pub mod postal_code;
pub mod proximity;
pub mod store;
pub mod store_error;
pub mod store_service;
pub mod trace_id;

pub use self::address::{AddressLookupResult, CompleteAddress, RawAddress};
pub use self::distance::{Coordinate, EARTH_RADIUS_KM, distance_km};
pub use self::enrichment::AddressEnrichmentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::postal_code::{PostalCode, PostalCodeError, UNSPECIFIED_POSTAL_CODE};
pub use self::proximity::{
    DEFAULT_MAX_DISTANCE_KM, NearbyStore, find_nearby, validate_radius_km,
};
pub use self::store::{
    NewStore, STORE_NAME_MIN, Store, StoreAddress, StoreDraft, StoreId, StoreName,
    StoreValidationError,
};
pub use self::store_error::StoreError;
pub use self::store_service::StoreService;
pub use self::trace_id::TraceId;
