//! Brazilian postal code (CEP) value object.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder recorded when an address is geocoded without a postal code.
pub const UNSPECIFIED_POSTAL_CODE: &str = "unspecified";

/// Validation error raised by [`PostalCode::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCodeError {
    value: String,
}

impl PostalCodeError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for PostalCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "postal code {:?} must match NNNNN-NNN or NNNNNNNN",
            self.value
        )
    }
}

impl std::error::Error for PostalCodeError {}

static POSTAL_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn postal_code_regex() -> &'static Regex {
    POSTAL_CODE_RE.get_or_init(|| {
        Regex::new(r"^(\d{5})-?(\d{3})$")
            .unwrap_or_else(|error| panic!("postal code regex failed to compile: {error}"))
    })
}

/// Validated CEP held in the hyphenated `NNNNN-NNN` form.
///
/// Input with or without the hyphen is accepted, so `01310100` and
/// `01310-100` compare equal.
///
/// # Examples
/// ```
/// use store_locator::domain::PostalCode;
///
/// let cep = PostalCode::new("01310100").expect("valid CEP");
/// assert_eq!(cep.as_ref(), "01310-100");
/// assert_eq!(cep.digits(), "01310100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PostalCodeError> {
        let raw = value.as_ref().trim();
        let captures = postal_code_regex()
            .captures(raw)
            .ok_or_else(|| PostalCodeError {
                value: value.as_ref().to_owned(),
            })?;
        Ok(Self(format!("{}-{}", &captures[1], &captures[2])))
    }

    /// The canonical `NNNNN-NNN` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eight digits without the hyphen.
    pub fn digits(&self) -> String {
        self.0.replace('-', "")
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
