use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;
use crate::id::parse_hex_u16;

/// Declared data type of a property entry.
///
/// The tag is opaque to the table codec: any 16-bit value round-trips. The
/// associated constants name the common fixed-length and variable-length
/// tags so they can be printed, nothing more.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyType(u16);

impl PropertyType {
    pub const SHORT: Self = Self(0x0002);
    pub const LONG: Self = Self(0x0003);
    pub const FLOAT: Self = Self(0x0004);
    pub const DOUBLE: Self = Self(0x0005);
    pub const CURRENCY: Self = Self(0x0006);
    pub const APPTIME: Self = Self(0x0007);
    pub const ERROR: Self = Self(0x000A);
    pub const BOOLEAN: Self = Self(0x000B);
    pub const LONGLONG: Self = Self(0x0014);
    pub const STRING8: Self = Self(0x001E);
    pub const UNICODE: Self = Self(0x001F);
    pub const SYSTIME: Self = Self(0x0040);
    pub const CLSID: Self = Self(0x0048);
    pub const BINARY: Self = Self(0x0102);

    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// The raw 16-bit value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Name of a well-known tag, or `None` for anything else.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::SHORT => "Short",
            Self::LONG => "Long",
            Self::FLOAT => "Float",
            Self::DOUBLE => "Double",
            Self::CURRENCY => "Currency",
            Self::APPTIME => "AppTime",
            Self::ERROR => "Error",
            Self::BOOLEAN => "Boolean",
            Self::LONGLONG => "LongLong",
            Self::STRING8 => "String8",
            Self::UNICODE => "Unicode",
            Self::SYSTIME => "SysTime",
            Self::CLSID => "Clsid",
            Self::BINARY => "Binary",
            _ => return None,
        };
        Some(name)
    }

    /// Whether a well-known tag stores its value inline in the 8-byte
    /// payload. Unknown tags report `false`.
    pub fn is_fixed_length(self) -> bool {
        matches!(
            self,
            Self::SHORT
                | Self::LONG
                | Self::FLOAT
                | Self::DOUBLE
                | Self::CURRENCY
                | Self::APPTIME
                | Self::ERROR
                | Self::BOOLEAN
                | Self::LONGLONG
                | Self::SYSTIME
        )
    }

    /// Hex representation, e.g. `0x001f`.
    pub fn to_hex(self) -> String {
        format!("{:#06x}", self.0)
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        parse_hex_u16(s).map(Self)
    }
}

impl fmt::Debug for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyType({})", self.to_hex())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

impl From<u16> for PropertyType {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<PropertyType> for u16 {
    fn from(ty: PropertyType) -> Self {
        ty.0
    }
}

impl Serialize for PropertyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PropertyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
