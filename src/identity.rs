//! # Identity Newtypes
//!
//! The validated [`Siret`] newtype. A `Siret` can only exist if its
//! string passed classification, so downstream code never re-checks
//! format or checksum.
//!
//! ## Validation
//!
//! Construction routes through [`classify`]; the two failure
//! classifications surface as distinct [`ValidationError`] variants.
//! No normalization is performed — separators or whitespace in the
//! input are rejected, and lenient intake is the caller's concern.
//!
//! ## Spec Reference
//!
//! - SIRET: INSEE establishment identifier, 14 digits
//!   (9-digit SIREN + 5-digit NIC)
//! - SIREN: INSEE organization identifier, the first 9 digits

use serde::{Deserialize, Serialize};

use crate::checksum::{classify, SiretClassification};
use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// French business establishment identifier (SIRET).
///
/// 14 digits: a 9-digit SIREN identifying the organization followed by a
/// 5-digit NIC identifying the establishment. Validated at construction:
/// exact 14-digit format plus the checksum rule for the number's range
/// (Luhn variant in general, digit-sum modulo 5 for La Poste).
///
/// Leading zeros are significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Siret(String);

impl_validating_deserialize!(Siret);

impl Siret {
    /// Create a SIRET from a string value, validating format and checksum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongSiretFormat`] if the string is not
    /// exactly 14 digits, or [`ValidationError::InvalidSiretChecksum`] if
    /// it is 14 digits but fails its range's checksum rule.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        match classify(Some(&s)) {
            SiretClassification::Valid => Ok(Self(s)),
            SiretClassification::WrongFormat => Err(ValidationError::WrongSiretFormat(s)),
            SiretClassification::InvalidChecksum => Err(ValidationError::InvalidSiretChecksum(s)),
        }
    }

    /// Access the SIRET string value (14 digits).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the SIREN: the first 9 digits, identifying the organization.
    pub fn siren(&self) -> &str {
        &self.0[..9]
    }

    /// Return the NIC: the last 5 digits, identifying the establishment.
    pub fn nic(&self) -> &str {
        &self.0[9..]
    }
}

impl std::fmt::Display for Siret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Siret {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
