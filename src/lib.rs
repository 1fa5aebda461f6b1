//! # siret — French Business Identifier Validation
//!
//! Structural validation of SIRET numbers (the 14-digit INSEE identifier
//! for a French business establishment): format checking plus a checksum
//! that branches on the La Poste numbering range, which uses a different
//! rule than the rest of the registry.
//!
//! ## Key Design Principles
//!
//! 1. **One pure classification function.** [`classify`] is total,
//!    deterministic, and side-effect free: every input — absent, empty,
//!    malformed, or well-formed — maps to exactly one
//!    [`SiretClassification`]. Callers decide how to surface the result.
//!
//! 2. **Two distinct failure kinds.** `WrongFormat` (not 14 digits) and
//!    `InvalidChecksum` (14 digits, arithmetic fails) are never collapsed;
//!    they mean different things to a user correcting their input.
//!
//! 3. **Newtype wrapper for the domain primitive.** [`Siret`] is validated
//!    at construction — no bare strings for identifiers past the boundary,
//!    and deserialization routes through the same validation.
//!
//! 4. **No registry lookups.** Validation is purely arithmetic over the
//!    supplied digits; whether the number exists in SIRENE is out of scope.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod checksum;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use checksum::{classify, SiretClassification, LA_POSTE_SIREN, LA_POSTE_SIRET_SIEGE};
pub use error::ValidationError;
pub use identity::Siret;
