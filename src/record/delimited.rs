//! Delimited record codec
//!
//! Fields are joined with one configured delimiter character. There is no
//! escaping: a delimiter embedded in a name or department corrupts the
//! field boundaries, a known limitation of the format.

use crate::error::{Result, RosterError};
use crate::record::StudentRecord;

/// Minimum number of fields a record line must split into
const MIN_FIELDS: usize = 4;

/// Encode a record as one delimited line
///
/// Numeric fields use their default text form (`3.5`, not `3.50`).
pub fn encode(record: &StudentRecord, delimiter: char) -> String {
    format!(
        "{id}{d}{name}{d}{gpa}{d}{dept}",
        id = record.id,
        name = record.name,
        gpa = record.gpa,
        dept = record.dept,
        d = delimiter,
    )
}

/// Decode one delimited line back into a record
///
/// Requires at least four parts; extra parts beyond the department are
/// ignored. Fails with `Parse` on a short split or a bad numeric field.
pub fn decode(line: &str, delimiter: char) -> Result<StudentRecord> {
    let parts: Vec<&str> = line.split(delimiter).collect();
    if parts.len() < MIN_FIELDS {
        return Err(RosterError::Parse(format!(
            "record has {} fields, expected at least {}",
            parts.len(),
            MIN_FIELDS
        )));
    }

    let id = parts[0]
        .parse::<u32>()
        .map_err(|e| RosterError::Parse(format!("invalid id {:?}: {}", parts[0], e)))?;
    let gpa = parts[2]
        .parse::<f64>()
        .map_err(|e| RosterError::Parse(format!("invalid gpa {:?}: {}", parts[2], e)))?;

    Ok(StudentRecord {
        id,
        name: parts[1].to_string(),
        gpa,
        dept: parts[3].to_string(),
    })
}
