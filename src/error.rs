//! # Error Types
//!
//! Constructor-surface errors for validated identifier newtypes. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The two variants mirror the two failure classifications of
//! [`classify`](crate::checksum::classify) and must stay distinct:
//! callers map them to different user-facing messages (malformed input
//! vs. well-formed but arithmetically invalid).

use thiserror::Error;

/// Validation failure for an identifier constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate is not exactly 14 decimal digits.
    #[error("wrong SIRET format (expected exactly 14 digits): {0:?}")]
    WrongSiretFormat(String),

    /// The candidate is 14 digits but fails its checksum rule.
    #[error("invalid SIRET checksum: {0:?}")]
    InvalidSiretChecksum(String),
}
