//! Shared validation helpers for the HTTP adapter.
//!
//! Every failure becomes an `invalid_request` error whose details carry the
//! offending camelCase field and a stable machine-readable code.

use serde_json::json;

use crate::domain::{Error, PostalCode, StoreId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidPostalCode,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidPostalCode => "invalid_postal_code",
        }
    }
}

/// HTTP field name as it appears in request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ValidationCode, value: Option<&str>) -> Error {
    let details = match value {
        Some(value) => json!({
            "field": field.as_str(),
            "value": value,
            "code": code.as_str(),
        }),
        None => json!({
            "field": field.as_str(),
            "code": code.as_str(),
        }),
    };
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        format!("missing required field: {}", field.as_str()),
        ValidationCode::MissingField,
        None,
    )
}

/// Require a non-blank string, returning it trimmed.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_store_id(value: &str, field: FieldName) -> Result<StoreId, Error> {
    value.parse::<StoreId>().map_err(|_| {
        field_error(
            field,
            format!("{} must be a valid UUID", field.as_str()),
            ValidationCode::InvalidUuid,
            Some(value),
        )
    })
}

pub(crate) fn parse_postal_code(value: &str, field: FieldName) -> Result<PostalCode, Error> {
    PostalCode::new(value).map_err(|_| {
        field_error(
            field,
            format!("{} must match NNNNN-NNN or NNNNNNNN", field.as_str()),
            ValidationCode::InvalidPostalCode,
            Some(value),
        )
    })
}
