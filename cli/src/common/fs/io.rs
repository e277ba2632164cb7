//! # Tarstats Filesystem Metadata
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Filesystem lookups the scanner needs beyond the archive contents. Today that
//! is only the on-disk byte length of an archive file.
//!
use crate::core::error::{Result, TarstatsError};
use std::fs;
use std::path::Path;
use tracing::trace;

/// Returns the byte length of the file at `path` as reported by `stat`.
///
/// # Errors
///
/// Returns [`TarstatsError::ArchiveNotFound`] if the metadata cannot be read.
pub fn file_len<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| TarstatsError::ArchiveNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("{} is {} bytes on disk", path.display(), metadata.len());
    Ok(metadata.len())
}
