//! Fixed-length property table codec.
//!
//! A property table is the fixed-length section of a compound-document
//! property stream: a flat run of 16-byte records, one per property, with
//! no header and no count prefix.
//!
//! # Architecture
//!
//! - **PropertyRecord**: one immutable entry (id, type tag, flags, 8-byte payload)
//! - **PropertyTable**: ordered entries with validated append, decode, and encode
//! - **codec**: the shared 16-byte record layout used by both directions
//! - **TableConfig**: decode limits

pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod table;

pub use codec::RECORD_SIZE;
pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use record::{PropertyRecord, DATA_SIZE};
pub use table::PropertyTable;

pub use propstream_types::{PropertyFlags, PropertyId, PropertyTag, PropertyType};
