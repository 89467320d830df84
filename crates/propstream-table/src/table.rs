use std::io::{BufRead, Write};

use propstream_types::{PropertyFlags, PropertyId, PropertyType};
use tracing::debug;

use crate::codec::{self, RECORD_SIZE};
use crate::config::TableConfig;
use crate::error::{TableError, TableResult};
use crate::record::PropertyRecord;

/// Ordered collection of fixed-length property entries.
///
/// Insertion order is the on-disk order and is preserved through a
/// decode/encode round trip. Identifiers are not keys: duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyTable {
    records: Vec<PropertyRecord>,
    config: TableConfig,
}

impl PropertyTable {
    /// Create an empty table that decodes streams of any length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with explicit decode limits.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Validate the fields and append a record at the end of the table.
    ///
    /// On [`TableError::InvalidArgument`] the table is left untouched.
    pub fn append(
        &mut self,
        id: PropertyId,
        prop_type: PropertyType,
        data: &[u8],
        flags: impl Into<PropertyFlags>,
    ) -> TableResult<()> {
        let record = PropertyRecord::with_flags(id, prop_type, data, flags)?;
        self.records.push(record);
        Ok(())
    }

    /// Append an already-constructed record.
    pub fn push(&mut self, record: PropertyRecord) {
        self.records.push(record);
    }

    /// Read records from `reader` until it is exhausted, appending each one.
    ///
    /// Exhaustion is only checked between records. A source that ends part
    /// way through a record fails with [`TableError::MalformedStream`]; the
    /// records decoded before it stay in the table and the partial one is
    /// dropped. Returns the number of records appended.
    ///
    /// Fails with [`TableError::TooManyRecords`] once this call would
    /// append more than `max_records` records; earlier contents of the
    /// table do not count.
    pub fn decode<R: BufRead>(&mut self, mut reader: R) -> TableResult<usize> {
        let mut decoded = 0;
        let mut frame = [0u8; RECORD_SIZE];
        while !codec::at_end(&mut reader)? {
            let filled = codec::fill_frame(&mut reader, &mut frame)?;
            if filled < RECORD_SIZE {
                return Err(TableError::MalformedStream {
                    records_decoded: decoded,
                    trailing_bytes: filled,
                });
            }
            if decoded >= self.config.max_records {
                return Err(TableError::TooManyRecords {
                    limit: self.config.max_records,
                });
            }
            self.records.push(codec::parse_record(&frame));
            decoded += 1;
        }
        debug!(records = decoded, total = self.records.len(), "decoded property table");
        Ok(decoded)
    }

    /// Write every record, in table order, to `writer`.
    ///
    /// The writer is neither flushed nor closed.
    pub fn encode<W: Write>(&self, mut writer: W) -> TableResult<()> {
        for record in &self.records {
            codec::write_record(&mut writer, record)?;
        }
        debug!(
            records = self.records.len(),
            bytes = self.encoded_len(),
            "encoded property table"
        );
        Ok(())
    }

    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> TableResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decode a complete in-memory stream into a new table.
    pub fn from_bytes(bytes: &[u8]) -> TableResult<Self> {
        Self::from_bytes_with_config(bytes, TableConfig::default())
    }

    /// Decode a complete in-memory stream with explicit decode limits.
    pub fn from_bytes_with_config(bytes: &[u8], config: TableConfig) -> TableResult<Self> {
        let mut table = Self::with_config(config);
        table.decode(bytes)?;
        Ok(table)
    }

    /// Size of the encoded stream in bytes.
    pub fn encoded_len(&self) -> usize {
        self.records.len() * RECORD_SIZE
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PropertyRecord> {
        self.records.get(index)
    }

    /// First record carrying `id`, in table order.
    pub fn find(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a PropertyRecord;
    type IntoIter = std::slice::Iter<'a, PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
