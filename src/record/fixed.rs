//! Fixed-width record codec
//!
//! Every record occupies exactly [`RECORD_WIDTH`] bytes on disk (excluding
//! the line terminator), which is what makes RRN direct access possible.
//! Field widths are byte widths, not character counts: a multi-byte name
//! is truncated on a UTF-8 character boundary so no code point is ever
//! split across the field edge.

use crate::error::{Result, RosterError};
use crate::record::StudentRecord;

/// Field widths in bytes
pub const ID_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 20;
pub const GPA_WIDTH: usize = 4;
pub const DEPT_WIDTH: usize = 10;

/// Total encoded record width in bytes, excluding the line terminator
pub const RECORD_WIDTH: usize = ID_WIDTH + NAME_WIDTH + GPA_WIDTH + DEPT_WIDTH;

/// Fit a value into exactly `width` bytes
///
/// Truncates at the widest char boundary not exceeding `width`, then
/// right-pads with ASCII spaces. The result is always valid UTF-8 of
/// exactly `width` bytes.
fn fit(value: &str, width: usize) -> String {
    let mut cut = value.len().min(width);
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }

    let mut field = String::with_capacity(width);
    field.push_str(&value[..cut]);
    for _ in cut..width {
        field.push(' ');
    }
    field
}

/// Encode a record into its 39-byte fixed-width line
///
/// The id is left-zero-padded to 5 digits. The gpa is formatted with two
/// fractional digits and then byte-truncated like every other field, so a
/// value of 10.0 or more silently loses its last digit (`10.00` becomes
/// `10.0`): a boundary of the 4-byte field, kept as-is.
pub fn encode(record: &StudentRecord) -> String {
    let mut line = String::with_capacity(RECORD_WIDTH);
    line.push_str(&fit(&format!("{:0>ID_WIDTH$}", record.id), ID_WIDTH));
    line.push_str(&fit(&record.name, NAME_WIDTH));
    line.push_str(&fit(&format!("{:.2}", record.gpa), GPA_WIDTH));
    line.push_str(&fit(&record.dept, DEPT_WIDTH));
    line
}

/// Slice one field out of the raw record bytes
///
/// Tolerates buffers shorter than the full record width; the slice is
/// clamped to what is actually there.
fn field<'a>(bytes: &'a [u8], offset: usize, width: usize) -> Result<&'a str> {
    let start = offset.min(bytes.len());
    let end = (offset + width).min(bytes.len());
    std::str::from_utf8(&bytes[start..end])
        .map_err(|e| RosterError::Parse(format!("field at offset {} is not UTF-8: {}", offset, e)))
}

/// Decode a fixed-width line back into a record
///
/// Slices at the cumulative field offsets, trims surrounding whitespace
/// and parses the numeric fields. Fails with `Parse` when the id or gpa
/// text does not parse.
pub fn decode(line: &str) -> Result<StudentRecord> {
    let bytes = line.as_bytes();

    let id_text = field(bytes, 0, ID_WIDTH)?.trim();
    let name = field(bytes, ID_WIDTH, NAME_WIDTH)?.trim().to_string();
    let gpa_text = field(bytes, ID_WIDTH + NAME_WIDTH, GPA_WIDTH)?.trim();
    let dept = field(bytes, ID_WIDTH + NAME_WIDTH + GPA_WIDTH, DEPT_WIDTH)?
        .trim()
        .to_string();

    let id = id_text
        .parse::<u32>()
        .map_err(|e| RosterError::Parse(format!("invalid id {:?}: {}", id_text, e)))?;
    let gpa = gpa_text
        .parse::<f64>()
        .map_err(|e| RosterError::Parse(format!("invalid gpa {:?}: {}", gpa_text, e)))?;

    Ok(StudentRecord { id, name, gpa, dept })
}
