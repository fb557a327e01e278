//! Error types for RosterDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for RosterDB operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {0}")]
    NotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Header Errors
    // -------------------------------------------------------------------------
    #[error("invalid file format: {0}")]
    Format(String),

    #[error("unknown file type: {0}")]
    UnknownType(String),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("record parse error: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Operation Errors
    // -------------------------------------------------------------------------
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing dependency: {0}")]
    DependencyMissing(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
}
