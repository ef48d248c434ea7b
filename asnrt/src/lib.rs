//! asnrt - runtime support for ASN.1 encoders and decoders
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `asnrt-core`: Error handling, encoding rules and value types
//!   (BitString, OctetString, ObjectIdentifier, Null, Enumerated)
//! - `asnrt-runtime`: Buffer, type and module capabilities and the
//!   runtime dispatch table backends plug into
//!
//! # Usage
//!
//! ```
//! use asnrt::BitString;
//!
//! let mut flags = BitString::new();
//! flags.set_bit(10, true);
//! assert_eq!(flags.len(), 11);
//! flags.trim_trailing_zeros();
//! assert_eq!(flags.to_string(), "'00000000001'B");
//! ```

// Re-export core types
pub use asnrt_core::{AsnError, AsnResult, EncodingRules};
pub use asnrt_core::datatypes::*;

// Re-export runtime API
pub mod runtime {
    pub use asnrt_runtime::*;
}

pub use asnrt_runtime::{AsnModule, AsnType, Buffer, ByteBuffer, Runtime, RuntimeBuilder};
