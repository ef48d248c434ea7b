//! Runtime contracts for ASN.1 codec backends
//!
//! This crate defines the capabilities a concrete encoder/decoder backend
//! works against:
//!
//! - [`Buffer`]: byte sink/source created under some [`EncodingRules`]
//! - [`AsnType`]: type descriptor used to select encoding behaviour per value
//! - [`AsnModule`]: lookup surface for schema-driven (metadata-loaded) encoding
//! - [`Runtime`]: the five swappable behaviours (allocate, wrap, encode,
//!   decode, load metadata) a backend supplies, assembled with [`RuntimeBuilder`]
//!
//! [`ByteBuffer`] is a reference [`Buffer`] backed by `bytes::BytesMut`.

pub mod buffer;
pub mod types;
pub mod runtime;
pub mod builder;

pub use asnrt_core::{AsnError, AsnResult, EncodingRules};
pub use buffer::{Buffer, BufferMode, ByteBuffer};
pub use types::{AsnModule, AsnType};
pub use runtime::{AllocateFn, DecodeFn, EncodeFn, LoadMetaFn, Runtime};
pub use builder::{RuntimeBuilder, DEFAULT_BUFFER_CAPACITY};
