//! Encoding rules identifier
//!
//! A small closed set of numeric tags distinguishing the binary encoding
//! conventions a buffer or codec operates under. The value types in this
//! crate treat it as an opaque tag.

use crate::error::{AsnError, AsnResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ASN.1 encoding rules
///
/// The numeric values are part of the runtime contract: buffers report the
/// rules they were created with as a single byte.
///
/// | rules            | value |
/// |------------------|-------|
/// | Basic (BER)      | 0     |
/// | Canonical (CER)  | 1     |
/// | Distinguished    | 2     |
/// | Unaligned PER    | 3     |
/// | Aligned PER      | 4     |
/// | Octet (OER)      | 8     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EncodingRules {
    /// Basic Encoding Rules
    Basic = 0,
    /// Canonical Encoding Rules
    Canonical = 1,
    /// Distinguished Encoding Rules
    Distinguished = 2,
    /// Unaligned Packed Encoding Rules
    UnalignedPacked = 3,
    /// Aligned Packed Encoding Rules
    AlignedPacked = 4,
    /// Octet Encoding Rules
    Octet = 8,
}

impl EncodingRules {
    /// Get the encoding rules from their numeric tag
    ///
    /// # Errors
    /// Returns `AsnError::UnsupportedEncodingRules` for any value outside the
    /// closed set.
    pub fn from_u8(value: u8) -> AsnResult<Self> {
        match value {
            0 => Ok(EncodingRules::Basic),
            1 => Ok(EncodingRules::Canonical),
            2 => Ok(EncodingRules::Distinguished),
            3 => Ok(EncodingRules::UnalignedPacked),
            4 => Ok(EncodingRules::AlignedPacked),
            8 => Ok(EncodingRules::Octet),
            other => Err(AsnError::UnsupportedEncodingRules(other)),
        }
    }

    /// Numeric tag of these encoding rules
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether these are one of the packed (PER) variants
    pub fn is_packed(self) -> bool {
        matches!(
            self,
            EncodingRules::UnalignedPacked | EncodingRules::AlignedPacked
        )
    }

    /// Whether these rules produce a single canonical encoding per value
    pub fn is_canonical(self) -> bool {
        matches!(
            self,
            EncodingRules::Canonical | EncodingRules::Distinguished
        )
    }

    /// Short conventional name (BER, CER, DER, UPER, APER, OER)
    pub fn short_name(self) -> &'static str {
        match self {
            EncodingRules::Basic => "BER",
            EncodingRules::Canonical => "CER",
            EncodingRules::Distinguished => "DER",
            EncodingRules::UnalignedPacked => "UPER",
            EncodingRules::AlignedPacked => "APER",
            EncodingRules::Octet => "OER",
        }
    }
}

impl Default for EncodingRules {
    fn default() -> Self {
        EncodingRules::Basic
    }
}

impl TryFrom<u8> for EncodingRules {
    type Error = AsnError;

    fn try_from(value: u8) -> AsnResult<Self> {
        Self::from_u8(value)
    }
}

impl From<EncodingRules> for u8 {
    fn from(rules: EncodingRules) -> Self {
        rules.as_u8()
    }
}

impl fmt::Display for EncodingRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
