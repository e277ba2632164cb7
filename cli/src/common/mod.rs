//! # Tarstats Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for the collaborators the
//! scanner and the report are built on. It keeps I/O details (archive formats,
//! filesystem metadata) and presentation details (number formatting) apart
//! from the counting logic in `stats` and `scanner`.
//!
//! ## Architecture
//!
//! - **`archive`**: Lists the members of a tar archive, transparently decompressing it.
//! - **`fs`**: Filesystem metadata such as the on-disk size of an archive.
//! - **`ui`**: Human-readable number formatting for the text report.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarstats::common::{archive, fs, ui};
//!
//! # fn run_example() -> tarstats::core::error::Result<()> {
//! let members = archive::tar::list_members("site.tgz")?;
//! let on_disk = fs::io::file_len("site.tgz")?;
//! println!("{} members, {}", members.len(), ui::human::rounded_units(on_disk, true)?);
//! # Ok(())
//! # }
//! ```
//!

/// Member listing for tar archives (with gzip, xz and zstd support).
pub mod archive;
/// Filesystem metadata lookups.
pub mod fs;
/// Human-readable number formatting.
pub mod ui;
