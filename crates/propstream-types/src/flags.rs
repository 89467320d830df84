use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Access and visibility attributes of a property entry.
///
/// Stored as 32 bits on the wire. Bits outside the named constants are
/// preserved untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyFlags(u32);

impl PropertyFlags {
    pub const MANDATORY: Self = Self(0x0000_0001);
    pub const READABLE: Self = Self(0x0000_0002);
    pub const WRITABLE: Self = Self(0x0000_0004);

    const NAMED: [(Self, &'static str); 3] = [
        (Self::MANDATORY, "MANDATORY"),
        (Self::READABLE, "READABLE"),
        (Self::WRITABLE, "WRITABLE"),
    ];

    /// No flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Readable and writable: the default for newly created entries.
    pub const fn read_write() -> Self {
        Self(Self::READABLE.0 | Self::WRITABLE.0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl Default for PropertyFlags {
    fn default() -> Self {
        Self::read_write()
    }
}

impl BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PropertyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PropertyFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<u8> for PropertyFlags {
    fn from(bits: u8) -> Self {
        Self(u32::from(bits))
    }
}

impl From<u16> for PropertyFlags {
    fn from(bits: u16) -> Self {
        Self(u32::from(bits))
    }
}

impl From<u32> for PropertyFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<PropertyFlags> for u32 {
    fn from(flags: PropertyFlags) -> Self {
        flags.0
    }
}

impl fmt::Debug for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyFlags({self})")
    }
}

impl fmt::Display for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut rest = self.0;
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                rest &= !flag.0;
                first = false;
            }
        }
        if rest != 0 {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{rest:#x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_union_of_read_and_write() {
        let flags = PropertyFlags::default();
        assert!(flags.contains(PropertyFlags::READABLE));
        assert!(flags.contains(PropertyFlags::WRITABLE));
        assert!(!flags.contains(PropertyFlags::MANDATORY));
        assert_eq!(flags.bits(), 0x6);
    }

    #[test]
    fn and_of_disjoint_flags_is_empty() {
        let both = PropertyFlags::READABLE & PropertyFlags::WRITABLE;
        assert!(both.is_empty());
        assert_ne!(both, PropertyFlags::default());
    }

    #[test]
    fn insert_and_remove() {
        let mut flags = PropertyFlags::empty();
        flags.insert(PropertyFlags::MANDATORY);
        flags |= PropertyFlags::READABLE;
        assert_eq!(flags.bits(), 0x3);
        flags.remove(PropertyFlags::MANDATORY);
        assert_eq!(flags, PropertyFlags::READABLE);
    }

    #[test]
    fn narrow_masks_widen() {
        assert_eq!(PropertyFlags::from(0x06u8), PropertyFlags::read_write());
        assert_eq!(PropertyFlags::from(0x8001u16).bits(), 0x8001);
    }

    #[test]
    fn display_lists_names_and_unknown_bits() {
        assert_eq!(PropertyFlags::empty().to_string(), "NONE");
        assert_eq!(PropertyFlags::read_write().to_string(), "READABLE|WRITABLE");
        assert_eq!(PropertyFlags::from_bits(0x11).to_string(), "MANDATORY|0x10");
        assert_eq!(PropertyFlags::from_bits(0x100).to_string(), "0x100");
    }

    #[test]
    fn serde_is_plain_integer() {
        let json = serde_json::to_string(&PropertyFlags::read_write()).unwrap();
        assert_eq!(json, "6");
        let parsed: PropertyFlags = serde_json::from_str("7").unwrap();
        assert!(parsed.contains(PropertyFlags::MANDATORY | PropertyFlags::WRITABLE));
    }
}
