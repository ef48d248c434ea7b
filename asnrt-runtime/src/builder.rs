//! Runtime builder
//!
//! Assembles a [`Runtime`] from independently supplied behaviours.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use asnrt_runtime::{AsnError, EncodingRules, Runtime};
//!
//! let runtime = Runtime::builder()
//!     .with_byte_buffers()
//!     .default_encoding_rules(EncodingRules::Distinguished)
//!     .encode(|_buffer, _value, _asn_type| Err(AsnError::Encoding("not generated".into())))
//!     .decode(|_buffer, _value, _asn_type| Err(AsnError::Decoding("not generated".into())))
//!     .load_meta(|_content| Err(AsnError::Metadata("no metadata".into())))
//!     .build()?;
//! # Ok::<(), AsnError>(())
//! ```

use crate::buffer::{Buffer, ByteBuffer};
use crate::runtime::{AllocateFn, DecodeFn, EncodeFn, LoadMetaFn, Runtime, WrapFn};
use crate::types::{AsnModule, AsnType};
use asnrt_core::{AsnError, AsnResult, EncodingRules};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Default capacity of buffers from [`Runtime::allocate_default`]
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Builder for [`Runtime`]
///
/// Every behaviour must be supplied before [`RuntimeBuilder::build`]
/// succeeds. Defaults:
/// - Encoding rules: Basic
/// - Buffer capacity: 1024 bytes
#[derive(Clone)]
pub struct RuntimeBuilder {
    allocate: Option<Arc<AllocateFn>>,
    wrap: Option<Arc<WrapFn>>,
    encode: Option<Arc<EncodeFn>>,
    decode: Option<Arc<DecodeFn>>,
    load_meta: Option<Arc<LoadMetaFn>>,
    default_encoding_rules: EncodingRules,
    default_capacity: usize,
}

impl RuntimeBuilder {
    /// Create a builder with no behaviours configured
    pub fn new() -> Self {
        Self {
            allocate: None,
            wrap: None,
            encode: None,
            decode: None,
            load_meta: None,
            default_encoding_rules: EncodingRules::default(),
            default_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Create a builder holding all behaviours and defaults of `runtime`
    pub fn from_runtime(runtime: &Runtime) -> Self {
        Self {
            allocate: Some(Arc::clone(&runtime.allocate)),
            wrap: Some(Arc::clone(&runtime.wrap)),
            encode: Some(Arc::clone(&runtime.encode)),
            decode: Some(Arc::clone(&runtime.decode)),
            load_meta: Some(Arc::clone(&runtime.load_meta)),
            default_encoding_rules: runtime.default_encoding_rules,
            default_capacity: runtime.default_capacity,
        }
    }

    /// Set the buffer allocation behaviour
    pub fn allocate<F>(mut self, allocate: F) -> Self
    where
        F: Fn(usize, EncodingRules) -> AsnResult<Box<dyn Buffer>> + Send + Sync + 'static,
    {
        self.allocate = Some(Arc::new(allocate));
        self
    }

    /// Set the behaviour wrapping existing bytes as a buffer
    pub fn wrap<F>(mut self, wrap: F) -> Self
    where
        F: Fn(&[u8], EncodingRules) -> AsnResult<Box<dyn Buffer>> + Send + Sync + 'static,
    {
        self.wrap = Some(Arc::new(wrap));
        self
    }

    /// Set the encode behaviour
    pub fn encode<F>(mut self, encode: F) -> Self
    where
        F: Fn(&mut dyn Buffer, &dyn Any, &dyn AsnType) -> AsnResult<()> + Send + Sync + 'static,
    {
        self.encode = Some(Arc::new(encode));
        self
    }

    /// Set the decode behaviour
    pub fn decode<F>(mut self, decode: F) -> Self
    where
        F: Fn(&mut dyn Buffer, &mut dyn Any, &dyn AsnType) -> AsnResult<()> + Send + Sync + 'static,
    {
        self.decode = Some(Arc::new(decode));
        self
    }

    /// Set the metadata loading behaviour
    pub fn load_meta<F>(mut self, load_meta: F) -> Self
    where
        F: Fn(&[u8]) -> AsnResult<Box<dyn AsnModule>> + Send + Sync + 'static,
    {
        self.load_meta = Some(Arc::new(load_meta));
        self
    }

    /// Use [`ByteBuffer`] for both allocation and wrapping
    pub fn with_byte_buffers(self) -> Self {
        self.allocate(|capacity, rules| {
            let buffer: Box<dyn Buffer> = Box::new(ByteBuffer::with_capacity(capacity, rules));
            Ok(buffer)
        })
        .wrap(|bytes, rules| {
            let buffer: Box<dyn Buffer> = Box::new(ByteBuffer::wrap(bytes, rules));
            Ok(buffer)
        })
    }

    /// Set the encoding rules used by [`Runtime::allocate_default`]
    pub fn default_encoding_rules(mut self, rules: EncodingRules) -> Self {
        self.default_encoding_rules = rules;
        self
    }

    /// Set the capacity used by [`Runtime::allocate_default`]
    pub fn default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Build the runtime
    ///
    /// # Errors
    /// Returns `AsnError::Missing` naming the first behaviour that was not supplied.
    pub fn build(self) -> AsnResult<Runtime> {
        Ok(Runtime {
            allocate: required(self.allocate, "allocate")?,
            wrap: required(self.wrap, "wrap")?,
            encode: required(self.encode, "encode")?,
            decode: required(self.decode, "decode")?,
            load_meta: required(self.load_meta, "load_meta")?,
            default_encoding_rules: self.default_encoding_rules,
            default_capacity: self.default_capacity,
        })
    }
}

fn required<T: ?Sized>(behaviour: Option<Arc<T>>, name: &'static str) -> AsnResult<Arc<T>> {
    behaviour.ok_or_else(|| {
        log::warn!("Runtime built without a {} behaviour", name);
        AsnError::Missing(name)
    })
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuntimeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeBuilder")
            .field("allocate", &self.allocate.is_some())
            .field("wrap", &self.wrap.is_some())
            .field("encode", &self.encode.is_some())
            .field("decode", &self.decode.is_some())
            .field("load_meta", &self.load_meta.is_some())
            .field("default_encoding_rules", &self.default_encoding_rules)
            .field("default_capacity", &self.default_capacity)
            .finish()
    }
}
