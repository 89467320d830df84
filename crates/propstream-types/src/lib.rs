//! Foundation types for propstream.
//!
//! This crate provides the small value types shared by every propstream
//! crate. None of them interpret property semantics; they only give the raw
//! 16- and 32-bit wire fields a name and a printable form.
//!
//! # Key Types
//!
//! - [`PropertyId`]: 16-bit property identifier
//! - [`PropertyType`]: 16-bit type tag, opaque to the table codec
//! - [`PropertyFlags`]: access/visibility bitmask (32 bits on the wire)
//! - [`PropertyTag`]: identifier and type packed into one `u32`

pub mod error;
pub mod flags;
pub mod id;
pub mod kind;
pub mod tag;

pub use error::TypeError;
pub use flags::PropertyFlags;
pub use id::PropertyId;
pub use kind::PropertyType;
pub use tag::PropertyTag;
