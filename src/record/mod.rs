//! Record Codec Module
//!
//! Encodes and decodes one student record to/from its two on-disk layouts.
//!
//! ## Responsibilities
//! - Byte-precise fixed-width encoding (zero-padding, UTF-8-safe truncation)
//! - Delimiter-joined text encoding
//! - Symmetric decoding with explicit parse errors
//!
//! ## Fixed Layout (39 bytes, no separators)
//! ```text
//! ┌─────────┬───────────────┬─────────┬───────────┐
//! │ ID (5)  │   Name (20)   │ GPA (4) │ Dept (10) │
//! └─────────┴───────────────┴─────────┴───────────┘
//! ```

pub mod delimited;
pub mod fixed;

use std::fmt;

use serde::Serialize;

/// A single student record
///
/// The `id` is the lookup key for search/delete/update; uniqueness is not
/// enforced. Serde renames pin the tabular export column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    #[serde(rename = "ID")]
    pub id: u32,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "GPA")]
    pub gpa: f64,

    #[serde(rename = "Department")]
    pub dept: String,
}

impl StudentRecord {
    pub fn new(id: u32, name: impl Into<String>, gpa: f64, dept: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gpa,
            dept: dept.into(),
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, GPA: {}, Dept: {}",
            self.id, self.name, self.gpa, self.dept
        )
    }
}
