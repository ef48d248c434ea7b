//! Value types shared by ASN.1 encoders and decoders

pub mod bit_string;
pub mod octet_string;
pub mod object_identifier;
pub mod null;
pub mod enumerated;

// Re-export types
pub use bit_string::BitString;
pub use octet_string::OctetString;
pub use object_identifier::ObjectIdentifier;
pub use null::{Null, NULL};
pub use enumerated::Enumerated;
