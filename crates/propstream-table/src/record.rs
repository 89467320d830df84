use serde::{Deserialize, Serialize};

use propstream_types::{PropertyFlags, PropertyId, PropertyTag, PropertyType};

use crate::error::{TableError, TableResult};

/// Width of the payload carried by every fixed-length entry.
pub const DATA_SIZE: usize = 8;

/// A single fixed-length property entry.
///
/// The payload is either the value itself (for types that fit in eight
/// bytes) or a length/reference field padded to eight bytes. The record
/// never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyRecord {
    id: PropertyId,
    #[serde(rename = "type")]
    prop_type: PropertyType,
    #[serde(default)]
    flags: PropertyFlags,
    #[serde(with = "data_hex")]
    data: [u8; DATA_SIZE],
}

impl PropertyRecord {
    /// Build a record with the default readable and writable flags.
    ///
    /// Fails with [`TableError::InvalidArgument`] unless `data` is exactly
    /// [`DATA_SIZE`] bytes long.
    pub fn new(id: PropertyId, prop_type: PropertyType, data: &[u8]) -> TableResult<Self> {
        Self::with_flags(id, prop_type, data, PropertyFlags::default())
    }

    /// Build a record with explicit flags. Narrow bitmasks (`u8`, `u16`)
    /// widen to the 32-bit wire representation.
    pub fn with_flags(
        id: PropertyId,
        prop_type: PropertyType,
        data: &[u8],
        flags: impl Into<PropertyFlags>,
    ) -> TableResult<Self> {
        let data: [u8; DATA_SIZE] = data.try_into().map_err(|_| TableError::InvalidArgument {
            expected: DATA_SIZE,
            actual: data.len(),
        })?;
        Ok(Self::from_parts(id, prop_type, flags.into(), data))
    }

    /// Build a record from already-framed fields. The payload width is
    /// fixed by the array type, so no validation is needed.
    pub fn from_parts(
        id: PropertyId,
        prop_type: PropertyType,
        flags: PropertyFlags,
        data: [u8; DATA_SIZE],
    ) -> Self {
        Self {
            id,
            prop_type,
            flags,
            data,
        }
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn prop_type(&self) -> PropertyType {
        self.prop_type
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    pub fn data(&self) -> &[u8; DATA_SIZE] {
        &self.data
    }

    /// Identifier and type packed into a [`PropertyTag`].
    pub fn tag(&self) -> PropertyTag {
        PropertyTag::new(self.id, self.prop_type)
    }

    /// The low four payload bytes as a little-endian `u32`.
    pub fn data_u32(&self) -> u32 {
        u32::from_le_bytes([self.data[0], self.data[1], self.data[2], self.data[3]])
    }

    /// The whole payload as a little-endian `u64`.
    pub fn data_u64(&self) -> u64 {
        u64::from_le_bytes(self.data)
    }
}

/// Serde adapter writing the payload as a 16-character hex string.
mod data_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATA_SIZE;

    pub fn serialize<S: Serializer>(
        data: &[u8; DATA_SIZE],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u8; DATA_SIZE], D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid property data: expected {DATA_SIZE} bytes, got {len}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u16) -> PropertyId {
        PropertyId::new(v)
    }

    #[test]
    fn new_accepts_eight_bytes() {
        let rec = PropertyRecord::new(id(0x0E07), PropertyType::LONG, &[1, 0, 0, 0, 0, 0, 0, 0])
            .unwrap();
        assert_eq!(rec.id(), id(0x0E07));
        assert_eq!(rec.prop_type(), PropertyType::LONG);
        assert_eq!(rec.data(), &[1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn default_flags_are_readable_and_writable() {
        let rec = PropertyRecord::new(id(1), PropertyType::BOOLEAN, &[0; 8]).unwrap();
        assert_eq!(rec.flags(), PropertyFlags::READABLE | PropertyFlags::WRITABLE);
        assert!(!rec.flags().is_empty());
    }

    #[test]
    fn short_data_is_rejected() {
        let err = PropertyRecord::new(id(1), PropertyType::LONG, &[0; 7]).unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidArgument {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn long_data_is_rejected() {
        let err = PropertyRecord::new(id(1), PropertyType::LONG, &[0; 9]).unwrap_err();
        assert!(matches!(err, TableError::InvalidArgument { actual: 9, .. }));
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(PropertyRecord::new(id(1), PropertyType::LONG, &[]).is_err());
    }

    #[test]
    fn with_flags_widens_narrow_mask() {
        let rec =
            PropertyRecord::with_flags(id(2), PropertyType::SHORT, &[0; 8], 0x01u8).unwrap();
        assert_eq!(rec.flags(), PropertyFlags::MANDATORY);
    }

    #[test]
    fn tag_packs_id_and_type() {
        let rec = PropertyRecord::new(id(0x0037), PropertyType::UNICODE, &[0; 8]).unwrap();
        assert_eq!(rec.tag().to_u32(), 0x0037_001F);
    }

    #[test]
    fn little_endian_payload_views() {
        let rec = PropertyRecord::new(
            id(3),
            PropertyType::LONGLONG,
            &[0x78, 0x56, 0x34, 0x12, 0x01, 0x00, 0x00, 0x00],
        )
        .unwrap();
        assert_eq!(rec.data_u32(), 0x1234_5678);
        assert_eq!(rec.data_u64(), 0x0000_0001_1234_5678);
    }

    #[test]
    fn serde_roundtrip() {
        let rec = PropertyRecord::with_flags(
            id(0x3007),
            PropertyType::SYSTIME,
            &[0xde, 0xad, 0xbe, 0xef, 0, 1, 2, 3],
            PropertyFlags::READABLE,
        )
        .unwrap();
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"deadbeef00010203\""));
        assert!(json.contains("\"type\":\"0x0040\""));
        let parsed: PropertyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }

    #[test]
    fn deserialize_defaults_flags() {
        let json = r#"{"id":"0x0001","type":"0x0003","data":"0100000000000000"}"#;
        let rec: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.flags(), PropertyFlags::read_write());
    }

    #[test]
    fn deserialize_enforces_payload_width() {
        let json = r#"{"id":"0x0001","type":"0x0003","data":"01000000000000"}"#;
        let err = serde_json::from_str::<PropertyRecord>(json).unwrap_err();
        assert!(err.to_string().contains("expected 8 bytes, got 7"));
    }
}
