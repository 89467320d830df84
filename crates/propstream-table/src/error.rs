use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid property data: expected {expected} bytes, got {actual}")]
    InvalidArgument { expected: usize, actual: usize },

    #[error(
        "malformed property stream: {trailing_bytes} trailing bytes after {records_decoded} complete records"
    )]
    MalformedStream {
        records_decoded: usize,
        trailing_bytes: usize,
    },

    #[error("property stream exceeds the limit of {limit} records")]
    TooManyRecords { limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TableResult<T> = Result<T, TableError>;
