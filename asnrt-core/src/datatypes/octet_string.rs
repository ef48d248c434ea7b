//! Octet string type for the ASN.1 runtime

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Arbitrary sequence of octets
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OctetString(Vec<u8>);

impl OctetString {
    /// Construct an octet string from its bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the octets
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the octets
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for OctetString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl DerefMut for OctetString {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for OctetString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<OctetString> for Vec<u8> {
    fn from(octets: OctetString) -> Self {
        octets.0
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// ASN.1 hexadecimal notation, e.g. `'0AFF'H`
impl fmt::Display for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        f.write_str("'H")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octet_string_display() {
        let octets = OctetString::from(&[0x0A, 0xFF][..]);
        assert_eq!(format!("{}", octets), "'0AFF'H");
        assert_eq!(format!("{}", OctetString::default()), "''H");
    }

    #[test]
    fn test_octet_string_deref() {
        let mut octets = OctetString::new(vec![1, 2]);
        octets.push(3);
        assert_eq!(octets.len(), 3);
        assert_eq!(octets.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_octet_string_serde_transparent() {
        let octets = OctetString::new(vec![1, 2]);
        assert_eq!(serde_json::to_string(&octets).unwrap(), "[1,2]");
    }
}
