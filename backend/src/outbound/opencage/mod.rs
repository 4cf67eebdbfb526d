//! OpenCage outbound adapter.
//!
//! Thin HTTP implementation of the `Geocoder` port backed by the OpenCage
//! geocoding API.

mod dto;
mod http_source;

pub use http_source::OpenCageHttpSource;
