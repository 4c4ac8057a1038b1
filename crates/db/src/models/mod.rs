//! Row models.
//!
//! Each entity struct is `FromRow + Serialize` and matches its table
//! column-for-column. Creation and patch payloads live in
//! `vellum-core`; this layer only defines what comes back out of the
//! database.

pub mod character;
pub mod rules;
