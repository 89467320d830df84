//! Record framing for the fixed-length property table.
//!
//! ```text
//! offset  width  field
//!      0      2  identifier (u16 LE)
//!      2      2  type tag   (u16 LE)
//!      4      4  flags      (u32 LE)
//!      8      8  data       (opaque)
//! ```
//!
//! The same layout is used for reading and writing. There is no header,
//! padding, or count prefix: a stream of `n` records is exactly
//! `n * RECORD_SIZE` bytes.

use std::io::{self, BufRead, ErrorKind, Read, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use propstream_types::{PropertyFlags, PropertyId, PropertyType};

use crate::record::{PropertyRecord, DATA_SIZE};

/// Encoded width of one record.
pub const RECORD_SIZE: usize = 2 + 2 + 4 + DATA_SIZE;

/// Write one record in wire order.
pub fn write_record<W: Write>(writer: &mut W, record: &PropertyRecord) -> io::Result<()> {
    writer.write_u16::<LittleEndian>(record.id().value())?;
    writer.write_u16::<LittleEndian>(record.prop_type().value())?;
    writer.write_u32::<LittleEndian>(record.flags().bits())?;
    writer.write_all(record.data())
}

/// Decode one complete frame.
pub fn parse_record(frame: &[u8; RECORD_SIZE]) -> PropertyRecord {
    let id = LittleEndian::read_u16(&frame[0..2]);
    let prop_type = LittleEndian::read_u16(&frame[2..4]);
    let flags = LittleEndian::read_u32(&frame[4..8]);
    let mut data = [0u8; DATA_SIZE];
    data.copy_from_slice(&frame[8..RECORD_SIZE]);
    PropertyRecord::from_parts(
        PropertyId::new(id),
        PropertyType::new(prop_type),
        PropertyFlags::from_bits(flags),
        data,
    )
}

/// Returns `true` once the source has no more bytes to offer.
pub(crate) fn at_end<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.is_empty()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Fill `frame` from the source, returning how many bytes were read. Less
/// than `RECORD_SIZE` means the source ran dry mid-record.
pub(crate) fn fill_frame<R: Read>(
    reader: &mut R,
    frame: &mut [u8; RECORD_SIZE],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut frame[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
