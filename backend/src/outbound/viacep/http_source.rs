//! Reqwest-backed ViaCEP address lookup adapter.
//!
//! The adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into the domain lookup result.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::ViaCepResponseDto;
use crate::domain::ports::{AddressLookup, AddressLookupError};
use crate::domain::{AddressLookupResult, PostalCode};
use crate::outbound::http_support::status_message;

/// Address lookup adapter issuing `GET {base}/ws/{digits}/json/`.
pub struct ViaCepHttpSource {
    client: Client,
    base_url: Url,
}

impl ViaCepHttpSource {
    /// Build an adapter whose every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn lookup_url(&self, postal_code: &PostalCode) -> Result<Url, AddressLookupError> {
        self.base_url
            .join(&format!("ws/{}/json/", postal_code.digits()))
            .map_err(|error| AddressLookupError::transport(format!("invalid ViaCEP url: {error}")))
    }
}

#[async_trait]
impl AddressLookup for ViaCepHttpSource {
    async fn lookup_address(
        &self,
        postal_code: &PostalCode,
    ) -> Result<AddressLookupResult, AddressLookupError> {
        let url = self.lookup_url(postal_code)?;
        debug!(%postal_code, "querying ViaCEP");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(postal_code, status, body.as_ref()));
        }

        parse_address(postal_code, body.as_ref())
    }
}

fn parse_address(
    postal_code: &PostalCode,
    body: &[u8],
) -> Result<AddressLookupResult, AddressLookupError> {
    let decoded: ViaCepResponseDto = serde_json::from_slice(body).map_err(|error| {
        AddressLookupError::decode(format!("invalid ViaCEP JSON payload: {error}"))
    })?;
    decoded
        .into_domain()
        .ok_or_else(|| AddressLookupError::not_found(postal_code.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> AddressLookupError {
    if error.is_timeout() {
        AddressLookupError::timeout(error.to_string())
    } else {
        AddressLookupError::transport(error.to_string())
    }
}

fn map_status_error(
    postal_code: &PostalCode,
    status: StatusCode,
    body: &[u8],
) -> AddressLookupError {
    match status {
        // ViaCEP answers 400 for codes it considers malformed.
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            AddressLookupError::not_found(postal_code.to_string())
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AddressLookupError::timeout(status_message(status, body))
        }
        _ => AddressLookupError::transport(status_message(status, body)),
    }
}
