//! # Tarstats Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout tarstats. Every fallible
//! operation returns [`Result`], an alias for `anyhow::Result`, whose root cause
//! is one of the [`TarstatsError`] variants below.
//!
//! ## Architecture
//!
//! The error kinds map onto the three failure domains of the tool:
//! - Archive access: [`TarstatsError::ArchiveNotFound`] (the file cannot be opened
//!   or stat'ed) and [`TarstatsError::ArchiveRead`] (the member listing failed)
//! - Number formatting: [`TarstatsError::NegativeValue`] and [`TarstatsError::RangeExceeded`]
//! - Configuration: [`TarstatsError::Config`]
//!
//! Both archive variants carry the offending path so the CLI can say which
//! archive of a batch failed.
//!
//! ## Examples
//!
//! ```rust
//! use tarstats::core::error::TarstatsError;
//! use tarstats::scanner;
//!
//! let err = scanner::scan_one("does-not-exist.tar").unwrap_err();
//! match err.downcast_ref::<TarstatsError>() {
//!     Some(TarstatsError::ArchiveNotFound { path, .. }) => {
//!         assert!(path.ends_with("does-not-exist.tar"));
//!     }
//!     other => panic!("unexpected error: {other:?}"),
//! }
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for tarstats.
#[derive(Error, Debug)]
pub enum TarstatsError {
    #[error("Can't read '{}': {source}", .path.display())]
    ArchiveNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't list members of '{}': {source}", .path.display())]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("negative numbers not supported: {0}")]
    NegativeValue(i128),

    #[error("maximum supported range exceeded: {0}")]
    RangeExceeded(i128),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TarstatsError {
    /// The archive path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ArchiveNotFound { path, .. } | Self::ArchiveRead { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Type alias for Result using anyhow::Error, matching how errors are propagated with `?`.
pub type Result<T> = anyhow::Result<T>;
