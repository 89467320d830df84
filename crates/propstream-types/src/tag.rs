use std::fmt;

use crate::id::PropertyId;
use crate::kind::PropertyType;

/// Identifier and type tag packed into a single `u32`: the identifier in
/// the high 16 bits, the type in the low 16 bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyTag(u32);

impl PropertyTag {
    pub const fn new(id: PropertyId, prop_type: PropertyType) -> Self {
        Self(((id.value() as u32) << 16) | prop_type.value() as u32)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn id(self) -> PropertyId {
        PropertyId::new((self.0 >> 16) as u16)
    }

    pub const fn prop_type(self) -> PropertyType {
        PropertyType::new((self.0 & 0xFFFF) as u16)
    }
}

impl fmt::Debug for PropertyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyTag({self})")
    }
}

impl fmt::Display for PropertyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
