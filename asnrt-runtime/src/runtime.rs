//! Runtime dispatch table
//!
//! A [`Runtime`] bundles the five behaviours a codec backend supplies. Each
//! behaviour is stored separately so a backend can be assembled from parts,
//! e.g. the reference [`ByteBuffer`](crate::ByteBuffer) allocation combined
//! with generated encode/decode functions.

use crate::buffer::Buffer;
use crate::builder::RuntimeBuilder;
use crate::types::{AsnModule, AsnType};
use asnrt_core::{AsnResult, EncodingRules};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Allocate an empty buffer of the given capacity
pub type AllocateFn = dyn Fn(usize, EncodingRules) -> AsnResult<Box<dyn Buffer>> + Send + Sync;

/// Wrap existing bytes as a buffer
pub type WrapFn = dyn Fn(&[u8], EncodingRules) -> AsnResult<Box<dyn Buffer>> + Send + Sync;

/// Encode a value of a type into a buffer
pub type EncodeFn =
    dyn Fn(&mut dyn Buffer, &dyn Any, &dyn AsnType) -> AsnResult<()> + Send + Sync;

/// Decode a value of a type from a buffer
pub type DecodeFn =
    dyn Fn(&mut dyn Buffer, &mut dyn Any, &dyn AsnType) -> AsnResult<()> + Send + Sync;

/// Load a metadata module from its serialized form
pub type LoadMetaFn = dyn Fn(&[u8]) -> AsnResult<Box<dyn AsnModule>> + Send + Sync;

/// Dispatch table of a codec backend
///
/// Cloning is cheap: behaviours are shared through `Arc`.
#[derive(Clone)]
pub struct Runtime {
    pub(crate) allocate: Arc<AllocateFn>,
    pub(crate) wrap: Arc<WrapFn>,
    pub(crate) encode: Arc<EncodeFn>,
    pub(crate) decode: Arc<DecodeFn>,
    pub(crate) load_meta: Arc<LoadMetaFn>,
    pub(crate) default_encoding_rules: EncodingRules,
    pub(crate) default_capacity: usize,
}

impl Runtime {
    /// Start configuring a runtime
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Builder holding this runtime's behaviours, for swapping some of them
    pub fn to_builder(&self) -> RuntimeBuilder {
        RuntimeBuilder::from_runtime(self)
    }

    pub fn default_encoding_rules(&self) -> EncodingRules {
        self.default_encoding_rules
    }

    pub fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    /// Allocate a buffer
    ///
    /// # Arguments
    /// * `length` - Initial capacity in bytes
    /// * `encoding_rules` - Encoding rules the buffer will carry
    pub fn allocate(&self, length: usize, encoding_rules: EncodingRules) -> AsnResult<Box<dyn Buffer>> {
        log::debug!("Allocating {} byte buffer for {}", length, encoding_rules);
        (self.allocate)(length, encoding_rules)
    }

    /// Allocate a buffer with the configured default capacity and encoding rules
    pub fn allocate_default(&self) -> AsnResult<Box<dyn Buffer>> {
        self.allocate(self.default_capacity, self.default_encoding_rules)
    }

    /// Wrap existing bytes as a buffer
    pub fn wrap(&self, array: &[u8], encoding_rules: EncodingRules) -> AsnResult<Box<dyn Buffer>> {
        log::debug!("Wrapping {} bytes as {} buffer", array.len(), encoding_rules);
        (self.wrap)(array, encoding_rules)
    }

    /// Encode `value` as an instance of `asn_type` into `buffer`
    pub fn encode(&self, buffer: &mut dyn Buffer, value: &dyn Any, asn_type: &dyn AsnType) -> AsnResult<()> {
        log::debug!(
            "Encoding type {} with {}",
            asn_type.asn_type_id(),
            buffer.encoding_rules()
        );
        (self.encode)(buffer, value, asn_type).inspect_err(|e| {
            log::debug!("Encoding type {} failed: {}", asn_type.asn_type_id(), e);
        })
    }

    /// Decode an instance of `asn_type` from `buffer` into `value`
    pub fn decode(&self, buffer: &mut dyn Buffer, value: &mut dyn Any, asn_type: &dyn AsnType) -> AsnResult<()> {
        log::debug!(
            "Decoding type {} with {}",
            asn_type.asn_type_id(),
            buffer.encoding_rules()
        );
        (self.decode)(buffer, value, asn_type).inspect_err(|e| {
            log::debug!("Decoding type {} failed: {}", asn_type.asn_type_id(), e);
        })
    }

    /// Load a metadata module from its serialized content
    pub fn load_meta(&self, content: &[u8]) -> AsnResult<Box<dyn AsnModule>> {
        log::debug!("Loading metadata module from {} bytes", content.len());
        (self.load_meta)(content)
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("default_encoding_rules", &self.default_encoding_rules)
            .field("default_capacity", &self.default_capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ByteBuffer;
    use crate::types::{MockAsnModule, MockAsnType};
    use asnrt_core::{AsnError, OctetString};

    /// Toy codec: a length byte followed by the octets.
    fn octet_runtime() -> Runtime {
        Runtime::builder()
            .with_byte_buffers()
            .encode(|buffer, value, _asn_type| {
                let octets = value
                    .downcast_ref::<OctetString>()
                    .ok_or_else(|| AsnError::Encoding("Expected OctetString".to_string()))?;
                let buffer = buffer
                    .as_any_mut()
                    .downcast_mut::<ByteBuffer>()
                    .ok_or_else(|| AsnError::Buffer("Expected ByteBuffer".to_string()))?;
                buffer.put_u8(octets.len() as u8)?;
                buffer.put_slice(octets)
            })
            .decode(|buffer, value, _asn_type| {
                let out = value
                    .downcast_mut::<OctetString>()
                    .ok_or_else(|| AsnError::Decoding("Expected OctetString".to_string()))?;
                let buffer = buffer
                    .as_any_mut()
                    .downcast_mut::<ByteBuffer>()
                    .ok_or_else(|| AsnError::Buffer("Expected ByteBuffer".to_string()))?;
                let len = buffer.get_u8()? as usize;
                *out = OctetString::from(buffer.get_slice(len)?);
                Ok(())
            })
            .load_meta(|content| {
                let count = content.len() as i32;
                let mut module = MockAsnModule::new();
                module.expect_get_type().returning(move |id| {
                    if id >= count {
                        return None;
                    }
                    let mut asn_type = MockAsnType::new();
                    asn_type.expect_asn_type_id().return_const(4u8);
                    let asn_type: Arc<dyn AsnType> = Arc::new(asn_type);
                    Some(asn_type)
                });
                let module: Box<dyn AsnModule> = Box::new(module);
                Ok(module)
            })
            .build()
            .unwrap()
    }

    fn octet_type() -> MockAsnType {
        let mut asn_type = MockAsnType::new();
        asn_type.expect_asn_type_id().return_const(4u8);
        asn_type
    }

    #[test]
    fn test_encode_then_decode() {
        let _ = env_logger::builder().is_test(true).try_init();
        let runtime = octet_runtime();
        let asn_type = octet_type();

        let mut buffer = runtime.allocate(16, EncodingRules::Octet).unwrap();
        runtime
            .encode(buffer.as_mut(), &OctetString::new(vec![0xCA, 0xFE]), &asn_type)
            .unwrap();
        assert_eq!(buffer.array(), &[0x02, 0xCA, 0xFE]);
        assert_eq!(buffer.encoding_rules(), EncodingRules::Octet);

        buffer.flip();
        let mut decoded = OctetString::default();
        runtime.decode(buffer.as_mut(), &mut decoded, &asn_type).unwrap();
        assert_eq!(decoded.as_bytes(), &[0xCA, 0xFE]);
    }

    #[test]
    fn test_wrap_then_decode() {
        let runtime = octet_runtime();
        let mut buffer = runtime.wrap(&[0x01, 0x7F], EncodingRules::Basic).unwrap();
        let mut decoded = OctetString::default();
        runtime.decode(buffer.as_mut(), &mut decoded, &octet_type()).unwrap();
        assert_eq!(decoded.as_bytes(), &[0x7F]);
    }

    #[test]
    fn test_encode_wrong_value_type() {
        let runtime = octet_runtime();
        let mut buffer = runtime.allocate_default().unwrap();
        let result = runtime.encode(buffer.as_mut(), &42u32, &octet_type());
        assert!(matches!(result, Err(AsnError::Encoding(_))));
        assert!(buffer.array().is_empty());
    }

    #[test]
    fn test_load_meta_lookup() {
        let runtime = octet_runtime();
        let module = runtime.load_meta(&[0, 0, 0]).unwrap();
        let asn_type = module.get_type(2).unwrap();
        assert_eq!(asn_type.asn_type_id(), 4);
        assert!(module.get_type(3).is_none());
    }

    #[test]
    fn test_swap_single_behaviour() {
        let runtime = octet_runtime();
        let strict = runtime
            .to_builder()
            .encode(|_, _, _| Err(AsnError::Encoding("read-only backend".to_string())))
            .build()
            .unwrap();

        let mut buffer = strict.allocate_default().unwrap();
        let value = OctetString::new(vec![1]);
        assert!(strict.encode(buffer.as_mut(), &value, &octet_type()).is_err());
        assert!(runtime.encode(buffer.as_mut(), &value, &octet_type()).is_ok());
    }

    #[test]
    fn test_module_value_lookup() {
        let mut module = MockAsnModule::new();
        module.expect_get_value().times(1).returning(|id, value| {
            assert_eq!(id, 9);
            let out = value
                .downcast_mut::<OctetString>()
                .ok_or_else(|| AsnError::Metadata("Expected OctetString".to_string()))?;
            out.push(0x09);
            Ok(())
        });

        let mut value = OctetString::default();
        module.get_value(9, &mut value).unwrap();
        assert_eq!(value.as_bytes(), &[0x09]);
    }

    #[test]
    fn test_runtime_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Runtime>();
    }
}
