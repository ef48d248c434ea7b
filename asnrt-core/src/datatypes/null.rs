//! ASN.1 NULL value

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single value of the ASN.1 NULL type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Null;

/// Shared NULL value
pub const NULL: Null = Null;

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NULL")
    }
}
