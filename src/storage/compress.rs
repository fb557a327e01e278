//! Whole-file gzip compression
//!
//! The compressor is a pure byte-stream transform: the source file is
//! compressed verbatim, with no knowledge of headers or records. A
//! compressed data file must be decompressed before the engine can
//! operate on it again.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Result, RosterError};

/// Literal suffix carried by every compressed artifact
pub const GZIP_SUFFIX: &str = ".gz";

/// Compress a file, producing `<path>.gz` next to it
pub fn compress(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(RosterError::NotFound(path.to_path_buf()));
    }

    let mut out_name = path.as_os_str().to_os_string();
    out_name.push(GZIP_SUFFIX);
    let out_path = PathBuf::from(out_name);

    let mut input = BufReader::new(File::open(path)?);
    let writer = BufWriter::new(File::create(&out_path)?);
    let mut encoder = GzEncoder::new(writer, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?.flush()?;

    tracing::debug!("compressed {} to {}", path.display(), out_path.display());
    Ok(out_path)
}

/// Decompress a `.gz` file, producing the path with the suffix stripped
///
/// Fails `Unsupported` when the input path does not end in `.gz`.
pub fn decompress(path: &Path) -> Result<PathBuf> {
    let name = path.as_os_str().to_string_lossy();
    if !name.ends_with(GZIP_SUFFIX) {
        return Err(RosterError::Unsupported(
            "decompression requires a .gz file".to_string(),
        ));
    }
    if !path.exists() {
        return Err(RosterError::NotFound(path.to_path_buf()));
    }

    let out_path = PathBuf::from(&name[..name.len() - GZIP_SUFFIX.len()]);

    let mut decoder = GzDecoder::new(BufReader::new(File::open(path)?));
    let mut output = BufWriter::new(File::create(&out_path)?);
    io::copy(&mut decoder, &mut output)?;
    output.flush()?;

    tracing::debug!("decompressed {} to {}", path.display(), out_path.display());
    Ok(out_path)
}
