//! Storage Engine Module
//!
//! Orchestrates the lifecycle of flat record files: create, append, full
//! scan, sequential search, RRN direct access, rewrite-based mutation,
//! structure conversion, tabular exchange and whole-file compression.
//!
//! ## Responsibilities
//! - Read the header and select the matching record codec per operation
//! - Keep scans lenient (undecodable lines are dropped, not surfaced)
//! - Rewrite the whole file for delete/update, never patch in place
//! - Keep RRN access in raw byte mode so seek offsets are exact
//!
//! ## Organization
//! A module of pure functions taking an explicit file path. The engine
//! holds no state between calls and re-reads the header on every
//! operation. Callers own the records; nothing is cached.

pub mod compress;
pub mod engine;
pub mod exchange;
pub mod rrn;

pub use engine::SearchOutcome;
