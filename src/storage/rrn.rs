//! RRN direct access
//!
//! Seek-based record access for fixed-width files. The RRN (relative
//! record number) is the zero-based ordinal of a record counted from the
//! first record after the header line.
//!
//! The byte offset of record `rrn` is:
//!
//! ```text
//! header_offset + rrn * (RECORD_WIDTH + terminator_width)
//! ```
//!
//! where `header_offset` is the exact byte length of the raw header line
//! including its terminator, and `terminator_width` is detected per file
//! from the header's own tail bytes (`\r\n` = 2, anything else = 1) so a
//! file created under a different line-ending convention still addresses
//! correctly.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::header::FileType;
use crate::record::{fixed, StudentRecord};
use crate::storage::engine::metadata;

/// Fetch the record at the given RRN, or `None` past end of file
///
/// Valid only for FIXED files; fails `Unsupported` otherwise. The file is
/// read in raw byte mode so seek offsets are exact. A short read or a
/// record that fails to decode is reported as absent, never as an error.
pub fn direct_access(path: &Path, rrn: u64) -> Result<Option<StudentRecord>> {
    let header = metadata(path)?;
    if header.file_type()? != FileType::Fixed {
        return Err(RosterError::Unsupported(
            "RRN access is only supported for fixed-length files".to_string(),
        ));
    }

    let mut reader = BufReader::new(File::open(path)?);

    // Measure the header line in raw bytes, terminator included
    let mut header_bytes = Vec::new();
    reader.read_until(b'\n', &mut header_bytes)?;
    let header_offset = header_bytes.len() as u64;

    let terminator_width: u64 = if header_bytes.ends_with(b"\r\n") { 2 } else { 1 };
    let stride = fixed::RECORD_WIDTH as u64 + terminator_width;

    reader.seek(SeekFrom::Start(header_offset + rrn * stride))?;

    let mut record_bytes = Vec::new();
    reader.read_until(b'\n', &mut record_bytes)?;
    if record_bytes.len() < fixed::RECORD_WIDTH {
        return Ok(None);
    }

    let line = match std::str::from_utf8(&record_bytes) {
        Ok(text) => text.trim_end_matches('\n').trim_end_matches('\r'),
        Err(_) => return Ok(None),
    };

    Ok(fixed::decode(line).ok())
}
