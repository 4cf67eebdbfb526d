//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL store repository using Diesel.
//! - **viacep**: postal code lookups against ViaCEP.
//! - **opencage**: forward geocoding against OpenCage.
//!
//! Adapters translate between wire or row formats and domain types; they hold
//! no business rules.

pub(crate) mod http_support;
pub mod opencage;
pub mod persistence;
pub mod viacep;
