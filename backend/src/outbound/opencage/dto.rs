//! DTOs for decoding OpenCage geocoding responses.

use serde::Deserialize;

use crate::domain::Coordinate;

#[derive(Debug, Deserialize)]
pub(super) struct OpenCageResponseDto {
    #[serde(default)]
    pub(super) results: Vec<OpenCageResultDto>,
    pub(super) status: OpenCageStatusDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct OpenCageResultDto {
    pub(super) geometry: OpenCageGeometryDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct OpenCageGeometryDto {
    pub(super) lat: f64,
    pub(super) lng: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct OpenCageStatusDto {
    pub(super) code: u16,
    #[serde(default)]
    pub(super) message: String,
}

/// Outcome of interpreting a decoded response.
#[derive(Debug, PartialEq)]
pub(super) enum OpenCageOutcome {
    Found(Coordinate),
    Empty,
    Rejected { code: u16, message: String },
}

impl OpenCageResponseDto {
    /// The first result wins; a non-200 status code overrides any results.
    pub(super) fn into_outcome(self) -> OpenCageOutcome {
        if self.status.code != 200 {
            return OpenCageOutcome::Rejected {
                code: self.status.code,
                message: self.status.message,
            };
        }
        match self.results.into_iter().next() {
            Some(result) => OpenCageOutcome::Found(Coordinate::new(
                result.geometry.lat,
                result.geometry.lng,
            )),
            None => OpenCageOutcome::Empty,
        }
    }
}
