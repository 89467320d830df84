use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("value {value} out of range for a {bits}-bit field")]
    OutOfRange { value: String, bits: u32 },
}
