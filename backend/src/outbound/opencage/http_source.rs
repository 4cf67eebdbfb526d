//! Reqwest-backed OpenCage geocoder adapter.
//!
//! The adapter owns transport details only: query construction, timeout and
//! HTTP error mapping, and JSON decoding into domain coordinates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{OpenCageOutcome, OpenCageResponseDto};
use crate::domain::Coordinate;
use crate::domain::ports::{Geocoder, GeocodingError};
use crate::outbound::http_support::status_message;

const GEOCODE_PATH: &str = "geocode/v1/json";
const COUNTRY_CODE: &str = "br";

/// Geocoder adapter issuing `GET {base}/geocode/v1/json`.
pub struct OpenCageHttpSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OpenCageHttpSource {
    /// Build an adapter whose every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> Result<Url, GeocodingError> {
        self.base_url
            .join(GEOCODE_PATH)
            .map_err(|error| GeocodingError::transport(format!("invalid OpenCage url: {error}")))
    }

    fn query_params<'a>(&'a self, query: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("q", query),
            ("key", self.api_key.as_str()),
            ("countrycode", COUNTRY_CODE),
            ("limit", "1"),
            ("no_annotations", "1"),
        ]
    }
}

#[async_trait]
impl Geocoder for OpenCageHttpSource {
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodingError> {
        let endpoint = self.endpoint()?;
        debug!(%query, "querying OpenCage");
        let response = self
            .client
            .get(endpoint)
            .query(&self.query_params(query))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_coordinate(query, body.as_ref())
    }
}

fn parse_coordinate(query: &str, body: &[u8]) -> Result<Coordinate, GeocodingError> {
    let decoded: OpenCageResponseDto = serde_json::from_slice(body).map_err(|error| {
        GeocodingError::decode(format!("invalid OpenCage JSON payload: {error}"))
    })?;
    match decoded.into_outcome() {
        OpenCageOutcome::Found(coordinate) if coordinate.is_valid() => Ok(coordinate),
        OpenCageOutcome::Found(coordinate) => Err(GeocodingError::decode(format!(
            "OpenCage returned out-of-range coordinates ({}, {})",
            coordinate.latitude, coordinate.longitude
        ))),
        OpenCageOutcome::Empty => Err(GeocodingError::no_results(query)),
        OpenCageOutcome::Rejected { code, message } => Err(GeocodingError::rejected(code, message)),
    }
}

fn map_transport_error(error: reqwest::Error) -> GeocodingError {
    if error.is_timeout() {
        GeocodingError::timeout(error.to_string())
    } else {
        GeocodingError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeocodingError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GeocodingError::timeout(status_message(status, body))
        }
        _ if status.is_client_error() => {
            GeocodingError::rejected(status.as_u16(), status_message(status, body))
        }
        _ => GeocodingError::transport(status_message(status, body)),
    }
}
