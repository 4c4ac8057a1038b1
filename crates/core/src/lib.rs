//! Domain logic for the Vellum character-record service.
//!
//! Everything in this crate is pure: validation, equipment
//! reconciliation, language derivation, record assembly, and patch
//! construction all operate on in-memory values. Database lookups and
//! HTTP concerns live in `vellum-db` and `vellum-api`.

pub mod assembly;
pub mod character;
pub mod equipment;
pub mod error;
pub mod languages;
pub mod patch;
pub mod types;
pub mod validation;
