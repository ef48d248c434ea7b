//! Core types for the ASN.1 runtime
//!
//! This crate provides the shared vocabulary used by ASN.1 encoders and
//! decoders: the encoding-rules identifier, error handling, and the basic
//! value types (bit string, octet string, object identifier, null and the
//! enumerated capability).

pub mod error;
pub mod encoding_rules;
pub mod datatypes;

pub use error::{AsnError, AsnResult};
pub use encoding_rules::EncodingRules;
pub use datatypes::*;
