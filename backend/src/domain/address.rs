//! Address value objects flowing through the enrichment pipeline.
//!
//! - [`AddressLookupResult`] is what the address lookup service reports for a
//!   postal code. Fields may be blank when the service knows the code only
//!   partially (city-wide CEPs carry no street).
//! - [`RawAddress`] is what the caller supplied alongside the postal code.
//! - [`CompleteAddress`] is the fully populated, geocoded result.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Normalised address reported by the address lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLookupResult {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl AddressLookupResult {
    /// Whether street, city and state are all present.
    pub fn is_complete(&self) -> bool {
        [&self.street, &self.city, &self.state]
            .into_iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Caller-supplied address fragments accompanying a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub number: String,
}

impl RawAddress {
    /// The trimmed street, city and state when every part is non-blank.
    ///
    /// # Examples
    /// ```
    /// use store_locator::domain::RawAddress;
    ///
    /// let raw = RawAddress {
    ///     street: Some(" Rua Augusta".into()),
    ///     city: Some("São Paulo".into()),
    ///     state: Some("SP ".into()),
    ///     number: "10".into(),
    /// };
    /// assert_eq!(raw.street_city_state(), Some(("Rua Augusta", "São Paulo", "SP")));
    /// ```
    pub fn street_city_state(&self) -> Option<(&str, &str, &str)> {
        let street = non_blank(self.street.as_deref())?;
        let city = non_blank(self.city.as_deref())?;
        let state = non_blank(self.state.as_deref())?;
        Some((street, city, state))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Fully populated, geocoded address produced by enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub number: String,
    pub coordinate: Coordinate,
}
