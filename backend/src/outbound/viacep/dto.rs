//! DTOs for decoding ViaCEP JSON responses.
//!
//! ViaCEP answers `200 OK` with `{"erro": true}` (older deployments send the
//! string `"true"`) for well-formed but unknown codes.

use serde::Deserialize;

use crate::domain::AddressLookupResult;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ErrorFlagDto {
    Bool(bool),
    Text(String),
}

impl ErrorFlagDto {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Text(text) => text.eq_ignore_ascii_case("true"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ViaCepResponseDto {
    #[serde(default)]
    pub(super) cep: String,
    #[serde(default)]
    pub(super) logradouro: String,
    #[serde(default)]
    pub(super) bairro: String,
    #[serde(default)]
    pub(super) localidade: String,
    #[serde(default)]
    pub(super) uf: String,
    pub(super) erro: Option<ErrorFlagDto>,
}

impl ViaCepResponseDto {
    /// `None` when the service flags the code as unknown.
    pub(super) fn into_domain(self) -> Option<AddressLookupResult> {
        if self.erro.as_ref().is_some_and(ErrorFlagDto::is_set) {
            return None;
        }
        Some(AddressLookupResult {
            street: self.logradouro,
            neighborhood: self.bairro,
            city: self.localidade,
            state: self.uf,
            postal_code: self.cep,
        })
    }
}
