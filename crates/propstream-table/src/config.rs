use serde::{Deserialize, Serialize};

/// Limits applied when decoding a property table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Maximum number of records a single decode call may append.
    /// Validated appends are not counted against this limit.
    pub max_records: usize,
}

impl Default for TableConfig {
    /// No limit: every complete record in the stream is decoded.
    fn default() -> Self {
        Self {
            max_records: usize::MAX,
        }
    }
}

impl TableConfig {
    /// Cap each decode call at `max_records` records.
    pub fn limited(max_records: usize) -> Self {
        Self { max_records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unbounded() {
        let c = TableConfig::default();
        assert_eq!(c.max_records, usize::MAX);
    }

    #[test]
    fn limited_config() {
        assert_eq!(TableConfig::limited(16).max_records, 16);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c: TableConfig = toml::from_str("").unwrap();
        assert_eq!(c, TableConfig::default());
        let c: TableConfig = toml::from_str("max_records = 12").unwrap();
        assert_eq!(c.max_records, 12);
    }
}
