//! Data models for Biblio API responses.
//!
//! The API enforces no schema, so records are ordered maps of normalized
//! field names to arbitrary JSON values rather than fixed structs.

mod record;

pub use record::{Payload, Record};
