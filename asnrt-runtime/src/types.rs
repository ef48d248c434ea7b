//! Type-descriptor and module capabilities

use asnrt_core::AsnResult;
use std::any::Any;
use std::sync::Arc;

/// Descriptor of an ASN.1 type
///
/// Encoders and decoders consult the descriptor to select per-value encoding
/// behaviour. Values are passed as `&dyn Any` because the concrete Rust type
/// of a value is owned by the generated code, not by the runtime.
#[cfg_attr(test, mockall::automock)]
pub trait AsnType {
    /// Numeric identifier of the type's kind
    fn asn_type_id(&self) -> u8;

    /// Tag of `value` under this type (CHOICE types tag per alternative)
    fn tag(&self, value: &dyn Any) -> i32;

    /// Whether an incoming tag selects this type
    fn match_tag(&self, tag: i32) -> bool;
}

/// Lookup surface of a loaded ASN.1 module
///
/// Identifiers are assigned by whatever produced the module metadata. The
/// `get_*` methods other than [`AsnModule::get_type`] fill a caller-supplied
/// value, which must be of the Rust type generated for that definition.
#[cfg_attr(test, mockall::automock)]
pub trait AsnModule {
    /// Type descriptor registered under `id`
    fn get_type(&self, id: i32) -> Option<Arc<dyn AsnType>>;

    /// Fill `value` with the value registered under `id`
    fn get_value(&self, id: i32, value: &mut dyn Any) -> AsnResult<()>;

    /// Fill `value_set` with the value set registered under `id`
    fn get_value_set(&self, id: i32, value_set: &mut dyn Any) -> AsnResult<()>;

    /// Fill `object` with the information object registered under `id`
    fn get_object(&self, id: i32, object: &mut dyn Any) -> AsnResult<()>;

    /// Fill `object_set` with the information object set registered under `id`
    fn get_object_set(&self, id: i32, object_set: &mut dyn Any) -> AsnResult<()>;
}
