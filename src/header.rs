//! Header Metadata Codec
//!
//! Every data file starts with a single metadata line that declares how the
//! record lines after it are encoded:
//!
//! ```text
//! HEADER:TYPE=FIXED,DATE=2023-10-27 14:03:11,FIELDS=ID|Name|GPA|Dept
//! HEADER:TYPE=DELIMITED,DELIMITER=|,DATE=2023-10-27 14:03:11,FIELDS=ID|Name|GPA|Dept
//! ```
//!
//! The decoder keeps the raw key/value pairs so a whole-file rewrite can
//! re-emit a header equivalent to the one it read. An unrecognized TYPE
//! token is preserved at decode time and only rejected once an operation
//! actually needs a codec for it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// Literal prefix of every header line
pub const HEADER_PREFIX: &str = "HEADER:";

/// Default field delimiter for DELIMITED files
pub const DEFAULT_DELIMITER: char = '|';

/// On-disk record encoding declared by the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Fixed-byte-width records, addressable by RRN
    Fixed,
    /// Variable-length records separated by a single delimiter character
    Delimited,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Fixed => write!(f, "FIXED"),
            FileType::Delimited => write!(f, "DELIMITED"),
        }
    }
}

impl FromStr for FileType {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FIXED" => Ok(FileType::Fixed),
            "DELIMITED" => Ok(FileType::Delimited),
            other => Err(RosterError::UnknownType(other.to_string())),
        }
    }
}

/// Decoded header metadata of a data file
///
/// Keys are stored as read from disk; `TYPE`, `DELIMITER`, `DATE` and
/// `FIELDS` are the ones the engine understands.
#[derive(Debug, Clone)]
pub struct FileHeader {
    entries: HashMap<String, String>,
}

impl FileHeader {
    /// Encode a fresh header line (without line terminator)
    ///
    /// `delimiter` must be `Some` for DELIMITED files and `None` for FIXED.
    pub fn encode(
        file_type: FileType,
        delimiter: Option<char>,
        date: &str,
        fields: &[&str],
    ) -> String {
        let mut header = format!("{}TYPE={}", HEADER_PREFIX, file_type);
        if let Some(d) = delimiter {
            header.push_str(&format!(",DELIMITER={}", d));
        }
        header.push_str(&format!(",DATE={},FIELDS={}", date, fields.join("|")));
        header
    }

    /// Decode a header line into its key/value pairs
    ///
    /// Splits on `,`, then each part on the first `=`. Parts without `=`
    /// are ignored. Fails with `Format` if the literal `HEADER:` prefix
    /// is missing.
    pub fn decode(line: &str) -> Result<Self> {
        let content = line
            .strip_prefix(HEADER_PREFIX)
            .ok_or_else(|| RosterError::Format("missing header".to_string()))?;

        let mut entries = HashMap::new();
        for part in content.split(',') {
            if let Some((key, value)) = part.split_once('=') {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        Ok(Self { entries })
    }

    /// Raw value for a header key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Declared record encoding
    ///
    /// Fails with `UnknownType` when the TYPE token is missing or not one
    /// of FIXED/DELIMITED.
    pub fn file_type(&self) -> Result<FileType> {
        self.get("TYPE").unwrap_or("").parse()
    }

    /// Declared field delimiter, defaulting to `|`
    ///
    /// Only the first character of the DELIMITER value is used.
    pub fn delimiter(&self) -> char {
        self.get("DELIMITER")
            .and_then(|v| v.chars().next())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    /// Creation timestamp, informational only
    pub fn date(&self) -> Option<&str> {
        self.get("DATE")
    }

    /// Re-encode this header for a whole-file rewrite
    ///
    /// Emits the known keys in canonical order (TYPE, DELIMITER, DATE,
    /// FIELDS), skipping the ones the original header did not carry.
    pub fn encode_line(&self) -> String {
        let mut header = String::from(HEADER_PREFIX);
        let mut first = true;
        for key in ["TYPE", "DELIMITER", "DATE", "FIELDS"] {
            if let Some(value) = self.get(key) {
                if !first {
                    header.push(',');
                }
                header.push_str(key);
                header.push('=');
                header.push_str(value);
                first = false;
            }
        }
        header
    }
}
