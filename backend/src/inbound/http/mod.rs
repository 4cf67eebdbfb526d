//! HTTP inbound adapter exposing the store REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod stores;
pub mod validation;

pub use error::ApiResult;
