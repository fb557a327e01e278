//! Core engine operations
//!
//! Every operation opens the file for the minimum necessary scope and
//! releases the handle on all paths. Mutations (delete/update) rewrite
//! header plus surviving records; only `append` extends a file in place.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;

use crate::error::{Result, RosterError};
use crate::header::{FileHeader, FileType, DEFAULT_DELIMITER};
use crate::record::{delimited, fixed, StudentRecord};

/// Field names recorded in every header's FIELDS entry
const FIELD_NAMES: [&str; 4] = ["ID", "Name", "GPA", "Dept"];

/// Header DATE timestamp format
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Marker inserted before the extension by [`convert_structure`]
const CONVERSION_MARKER: &str = "_converted";

/// Result of a sequential search, with its end-to-end wall-clock cost
///
/// The duration covers building the full in-memory record list plus the
/// linear scan, so it can be contrasted fairly with RRN direct access.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// First record whose id matched, if any
    pub record: Option<StudentRecord>,

    /// Wall-clock duration of the whole operation, fractional milliseconds
    pub elapsed_ms: f64,
}

/// Strip a trailing line terminator, leaving internal spaces intact
fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

/// Encode one record according to the header's declared TYPE
fn encode_record(header: &FileHeader, record: &StudentRecord) -> Result<String> {
    match header.file_type()? {
        FileType::Fixed => Ok(fixed::encode(record)),
        FileType::Delimited => Ok(delimited::encode(record, header.delimiter())),
    }
}

/// Create a new data file containing only the header line
///
/// Overwrites/truncates any existing file at `path`. The `delimiter` is
/// recorded in the header only for DELIMITED files.
pub fn create(path: &Path, file_type: FileType, delimiter: char) -> Result<()> {
    let date = Local::now().format(DATE_FORMAT).to_string();
    let delimiter = (file_type == FileType::Delimited).then_some(delimiter);
    let header = FileHeader::encode(file_type, delimiter, &date, &FIELD_NAMES);

    let mut file = File::create(path)?;
    writeln!(file, "{}", header)?;

    tracing::debug!("created {} file at {}", file_type, path.display());
    Ok(())
}

/// Read and decode the header of a data file
pub fn metadata(path: &Path) -> Result<FileHeader> {
    if !path.exists() {
        return Err(RosterError::NotFound(path.to_path_buf()));
    }

    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    FileHeader::decode(strip_terminator(&line))
}

/// Append one record, encoded per the file's declared TYPE
///
/// Re-reads the header on every call; nothing about the file is cached
/// between operations.
pub fn append(path: &Path, record: &StudentRecord) -> Result<()> {
    let header = metadata(path)?;
    let line = encode_record(&header, record)?;

    let mut file = OpenOptions::new().append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Read every record in the file, in on-disk order
///
/// Skips the header line. Only the trailing terminator is stripped from
/// each line; internal spaces are significant for fixed-width parsing.
/// Lines that fail to decode are dropped from the result without any
/// caller-visible diagnostic.
pub fn scan_all(path: &Path) -> Result<Vec<StudentRecord>> {
    let header = metadata(path)?;
    let file_type = header.file_type()?;
    let delimiter = header.delimiter();

    let reader = BufReader::new(File::open(path)?);

    let mut records = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let decoded = match file_type {
            FileType::Fixed => fixed::decode(&line),
            FileType::Delimited => delimited::decode(&line, delimiter),
        };
        match decoded {
            Ok(record) => records.push(record),
            Err(e) => tracing::debug!("dropping undecodable line in {}: {}", path.display(), e),
        }
    }

    Ok(records)
}

/// Sequentially search for the first record with a matching id
///
/// Times the complete operation (full scan plus linear comparison) so
/// the reported duration reflects what sequential access actually costs.
pub fn sequential_search(path: &Path, id: u32) -> Result<SearchOutcome> {
    let start = Instant::now();

    let records = scan_all(path)?;
    let record = records.into_iter().find(|r| r.id == id);

    Ok(SearchOutcome {
        record,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Rewrite the whole file: header plus the given records, in order
fn rewrite(path: &Path, header: &FileHeader, records: &[StudentRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", header.encode_line())?;
    for record in records {
        writeln!(writer, "{}", encode_record(header, record)?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Delete every record with a matching id
///
/// Rewrites the file (header + survivors in original relative order) only
/// when at least one match existed; otherwise the file is left untouched.
/// Returns whether a match was found.
pub fn delete(path: &Path, id: u32) -> Result<bool> {
    let header = metadata(path)?;
    let records = scan_all(path)?;

    let survivors: Vec<StudentRecord> =
        records.iter().filter(|r| r.id != id).cloned().collect();
    if survivors.len() == records.len() {
        return Ok(false);
    }

    rewrite(path, &header, &survivors)?;
    tracing::debug!(
        "deleted id {} from {} ({} records remain)",
        id,
        path.display(),
        survivors.len()
    );
    Ok(true)
}

/// Replace the first record with a matching id, preserving its position
///
/// Rewrites the whole file only when a match was found. Returns whether
/// a match was found.
pub fn update(path: &Path, id: u32, new_record: &StudentRecord) -> Result<bool> {
    let header = metadata(path)?;
    let mut records = scan_all(path)?;

    match records.iter_mut().find(|r| r.id == id) {
        Some(slot) => *slot = new_record.clone(),
        None => return Ok(false),
    }

    rewrite(path, &header, &records)?;
    Ok(true)
}

/// Convert a file to the other structure, producing a new file
///
/// Scans under the current TYPE, then creates `<stem>_converted<ext>`
/// next to the source with the new TYPE and appends every record
/// re-encoded for it. The source file is left unmodified.
pub fn convert_structure(path: &Path, new_type: FileType) -> Result<PathBuf> {
    let records = scan_all(path)?;

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let new_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, CONVERSION_MARKER, ext.to_string_lossy()),
        None => format!("{}{}", stem, CONVERSION_MARKER),
    };
    let new_path = path.with_file_name(new_name);

    create(&new_path, new_type, DEFAULT_DELIMITER)?;
    for record in &records {
        append(&new_path, record)?;
    }

    tracing::debug!(
        "converted {} to {} as {}",
        path.display(),
        new_type,
        new_path.display()
    );
    Ok(new_path)
}
