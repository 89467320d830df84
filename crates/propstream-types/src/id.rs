use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Identifier of a property entry.
///
/// Identifiers are caller-supplied and carry no uniqueness guarantee: a
/// table may hold several entries with the same `PropertyId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(u16);

impl PropertyId {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// The raw 16-bit value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Hex representation, e.g. `0x3001`.
    pub fn to_hex(self) -> String {
        format!("{:#06x}", self.0)
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        parse_hex_u16(s).map(Self)
    }
}

/// Parse a 16-bit hex value, accepting an optional `0x`/`0X` prefix.
pub(crate) fn parse_hex_u16(s: &str) -> Result<u16, TypeError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => TypeError::OutOfRange {
            value: s.to_string(),
            bits: 16,
        },
        _ => TypeError::InvalidHex(s.to_string()),
    })
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyId({})", self.to_hex())
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<u16> for PropertyId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<PropertyId> for u16 {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl Serialize for PropertyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PropertyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
