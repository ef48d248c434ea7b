use crate::error::{AsnError, AsnResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ASN.1 OBJECT IDENTIFIER
///
/// A sequence of arcs such as `1.2.840.113549`. The first arc is 0, 1 or 2,
/// and under arcs 0 and 1 the second arc is at most 39.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ObjectIdentifier {
    arcs: Vec<u32>,
}

impl ObjectIdentifier {
    /// Create an object identifier from its arcs
    ///
    /// # Returns
    ///
    /// Returns `Ok(ObjectIdentifier)` if the arcs form a valid identifier, `Err(AsnError)` otherwise
    pub fn new(arcs: Vec<u32>) -> AsnResult<Self> {
        if arcs.len() < 2 {
            return Err(AsnError::InvalidData(
                "Object identifier must have at least 2 arcs".to_string(),
            ));
        }
        if arcs[0] > 2 {
            return Err(AsnError::InvalidData(format!(
                "First object identifier arc must be 0, 1 or 2, got {}",
                arcs[0]
            )));
        }
        if arcs[0] < 2 && arcs[1] > 39 {
            return Err(AsnError::InvalidData(format!(
                "Second arc must be at most 39 under arc {}, got {}",
                arcs[0], arcs[1]
            )));
        }

        Ok(Self { arcs })
    }

    /// Get the arcs
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Whether `self` lies below (or equals) `prefix` in the identifier tree
    pub fn starts_with(&self, prefix: &ObjectIdentifier) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }
}

impl TryFrom<Vec<u32>> for ObjectIdentifier {
    type Error = AsnError;

    fn try_from(arcs: Vec<u32>) -> AsnResult<Self> {
        Self::new(arcs)
    }
}

impl From<ObjectIdentifier> for Vec<u32> {
    fn from(oid: ObjectIdentifier) -> Self {
        oid.arcs
    }
}

impl FromStr for ObjectIdentifier {
    type Err = AsnError;

    /// Parse dotted notation, e.g. "2.5.4.3"
    fn from_str(s: &str) -> AsnResult<Self> {
        let arcs = s
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| AsnError::InvalidData(format!("Invalid arc value: {}", part)))
            })
            .collect::<AsnResult<Vec<u32>>>()?;
        Self::new(arcs)
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
        }
        Ok(())
    }
}
