//! ViaCEP outbound adapter.
//!
//! Thin HTTP implementation of the `AddressLookup` port backed by the public
//! ViaCEP service.

mod dto;
mod http_source;

pub use http_source::ViaCepHttpSource;
