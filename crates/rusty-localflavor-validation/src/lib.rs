//! Rusty-Localflavor Validation Core
//!
//! Country-specific form field validators: Dutch zip codes, BSN and SoFi
//! numbers, phone numbers and legacy bank account numbers, plus Maltese
//! postal codes.
//!
//! Every validator is a pure function `fn(&str) -> Result<(), ValidationError>`
//! that runs a pattern stage first and a semantic stage (range, checksum or
//! length) second. The same functions back the garde adapters, the nutype
//! types and the WASM bindings.

pub mod checksum;
pub mod error;
pub mod kind;
pub mod messages;
pub mod mt;
pub mod nl;
pub mod rules;
pub mod validator;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use error::*;
pub use kind::*;
pub use messages::*;
pub use mt::*;
pub use nl::*;
pub use rules::*;
pub use validator::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
