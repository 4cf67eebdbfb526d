//! Store entity and its validation rules.
//!
//! A [`Store`] always carries a complete, geocoded address. New stores are
//! validated as a [`NewStore`] before the repository assigns an identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompleteAddress, Coordinate, PostalCode};

/// Minimum number of characters in a store name.
pub const STORE_NAME_MIN: usize = 3;

/// Validation errors raised when building a store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValidationError {
    NameTooShort { min: usize },
    BlankAddressField { field: &'static str },
    InvalidPostalCode { value: String },
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl fmt::Display for StoreValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort { min } => {
                write!(f, "store name must be at least {min} characters")
            }
            Self::BlankAddressField { field } => {
                write!(f, "store address {field} must not be blank")
            }
            Self::InvalidPostalCode { value } => {
                write!(f, "store postal code {value:?} is not a valid CEP")
            }
            Self::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(
                f,
                "store coordinates ({latitude}, {longitude}) are out of range"
            ),
        }
    }
}

impl std::error::Error for StoreValidationError {}

/// Repository-assigned store identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(Uuid);

impl StoreId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoreId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Store display name with at least [`STORE_NAME_MIN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoreName(String);

impl StoreName {
    pub fn new(name: impl Into<String>) -> Result<Self, StoreValidationError> {
        let name = name.into();
        if name.trim().chars().count() < STORE_NAME_MIN {
            return Err(StoreValidationError::NameTooShort {
                min: STORE_NAME_MIN,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<StoreName> for String {
    fn from(value: StoreName) -> Self {
        value.0
    }
}

impl TryFrom<String> for StoreName {
    type Error = StoreValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Address embedded in a persisted store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreAddress {
    street: String,
    city: String,
    state: String,
    postal_code: PostalCode,
    number: String,
    coordinate: Coordinate,
}

impl StoreAddress {
    pub fn street(&self) -> &str {
        self.street.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl TryFrom<CompleteAddress> for StoreAddress {
    type Error = StoreValidationError;

    fn try_from(value: CompleteAddress) -> Result<Self, Self::Error> {
        let CompleteAddress {
            street,
            city,
            state,
            postal_code,
            number,
            coordinate,
        } = value;

        require_non_blank("street", &street)?;
        require_non_blank("city", &city)?;
        require_non_blank("state", &state)?;
        require_non_blank("number", &number)?;
        let postal_code = PostalCode::new(&postal_code)
            .map_err(|_| StoreValidationError::InvalidPostalCode { value: postal_code })?;
        if !coordinate.is_valid() {
            return Err(StoreValidationError::InvalidCoordinate {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            });
        }

        Ok(Self {
            street,
            city,
            state,
            postal_code,
            number,
            coordinate,
        })
    }
}

impl From<StoreAddress> for CompleteAddress {
    fn from(value: StoreAddress) -> Self {
        Self {
            street: value.street,
            city: value.city,
            state: value.state,
            postal_code: value.postal_code.into(),
            number: value.number,
            coordinate: value.coordinate,
        }
    }
}

fn require_non_blank(field: &'static str, value: &str) -> Result<(), StoreValidationError> {
    if value.trim().is_empty() {
        return Err(StoreValidationError::BlankAddressField { field });
    }
    Ok(())
}

/// Unvalidated input for a new store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDraft {
    pub name: String,
    pub address: CompleteAddress,
}

/// Validated store awaiting an identifier from the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStore {
    name: StoreName,
    address: StoreAddress,
}

impl NewStore {
    /// Validate a draft.
    ///
    /// # Examples
    /// ```
    /// use store_locator::domain::{CompleteAddress, Coordinate, NewStore, StoreDraft};
    ///
    /// let store = NewStore::new(StoreDraft {
    ///     name: "Loja Paulista".into(),
    ///     address: CompleteAddress {
    ///         street: "Avenida Paulista".into(),
    ///         city: "São Paulo".into(),
    ///         state: "SP".into(),
    ///         postal_code: "01310-100".into(),
    ///         number: "1578".into(),
    ///         coordinate: Coordinate::new(-23.56, -46.65),
    ///     },
    /// })
    /// .expect("valid store");
    /// assert_eq!(store.address().postal_code().as_str(), "01310-100");
    /// ```
    pub fn new(draft: StoreDraft) -> Result<Self, StoreValidationError> {
        Ok(Self {
            name: StoreName::new(draft.name)?,
            address: StoreAddress::try_from(draft.address)?,
        })
    }

    pub fn name(&self) -> &StoreName {
        &self.name
    }

    pub fn address(&self) -> &StoreAddress {
        &self.address
    }

    /// Attach the identifier assigned on insert.
    pub fn with_id(self, id: StoreId) -> Store {
        Store {
            id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Persisted store.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    id: StoreId,
    name: StoreName,
    address: StoreAddress,
}

impl Store {
    pub fn id(&self) -> StoreId {
        self.id
    }

    pub fn name(&self) -> &StoreName {
        &self.name
    }

    pub fn address(&self) -> &StoreAddress {
        &self.address
    }

    /// Split into identifier, name and address.
    pub fn into_parts(self) -> (StoreId, StoreName, StoreAddress) {
        (self.id, self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn paulista() -> CompleteAddress {
        CompleteAddress {
            street: "Avenida Paulista".to_owned(),
            city: "São Paulo".to_owned(),
            state: "SP".to_owned(),
            postal_code: "01310100".to_owned(),
            number: "1578".to_owned(),
            coordinate: Coordinate::new(-23.56, -46.65),
        }
    }

    fn draft(name: &str, address: CompleteAddress) -> StoreDraft {
        StoreDraft {
            name: name.to_owned(),
            address,
        }
    }

    #[rstest]
    fn valid_draft_normalises_postal_code(paulista: CompleteAddress) {
        let store = NewStore::new(draft("Loja Paulista", paulista)).expect("valid store");
        assert_eq!(store.address().postal_code().as_str(), "01310-100");
        assert_eq!(store.name().as_ref(), "Loja Paulista");
    }

    #[rstest]
    #[case("")]
    #[case("ab")]
    #[case("  ab  ")]
    fn short_names_are_rejected(paulista: CompleteAddress, #[case] name: &str) {
        let err = NewStore::new(draft(name, paulista)).expect_err("short name");
        assert_eq!(err, StoreValidationError::NameTooShort { min: 3 });
    }

    #[rstest]
    #[case::street(|a: &mut CompleteAddress| a.street.clear(), "street")]
    #[case::city(|a: &mut CompleteAddress| a.city = " ".to_owned(), "city")]
    #[case::state(|a: &mut CompleteAddress| a.state.clear(), "state")]
    #[case::number(|a: &mut CompleteAddress| a.number = "  ".to_owned(), "number")]
    fn blank_fields_are_rejected(
        mut paulista: CompleteAddress,
        #[case] blank: fn(&mut CompleteAddress),
        #[case] field: &'static str,
    ) {
        blank(&mut paulista);
        let err = NewStore::new(draft("Loja", paulista)).expect_err("blank field");
        assert_eq!(err, StoreValidationError::BlankAddressField { field });
    }

    #[rstest]
    fn unspecified_postal_code_is_rejected(mut paulista: CompleteAddress) {
        paulista.postal_code = crate::domain::UNSPECIFIED_POSTAL_CODE.to_owned();
        let err = NewStore::new(draft("Loja", paulista)).expect_err("sentinel");
        assert!(matches!(err, StoreValidationError::InvalidPostalCode { .. }));
    }

    #[rstest]
    fn out_of_range_coordinates_are_rejected(mut paulista: CompleteAddress) {
        paulista.coordinate = Coordinate::new(123.0, 0.0);
        let err = NewStore::new(draft("Loja", paulista)).expect_err("bad coordinate");
        assert!(matches!(err, StoreValidationError::InvalidCoordinate { .. }));
    }

    #[rstest]
    fn number_keeps_letters(mut paulista: CompleteAddress) {
        paulista.number = "123A".to_owned();
        let store = NewStore::new(draft("Loja", paulista)).expect("valid store");
        assert_eq!(store.address().number(), "123A");
    }

    #[rstest]
    fn store_id_parses_uuid_text() {
        let id: StoreId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid uuid");
        assert_eq!(id.as_uuid(), &Uuid::nil());
        assert!("nope".parse::<StoreId>().is_err());
    }
}
