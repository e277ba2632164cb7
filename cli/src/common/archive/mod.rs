//! # Tarstats Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module is the archive-reading collaborator of the scanner. Given a
//! path it yields the ordered list of member descriptors, whatever compression
//! wraps the tar stream.
//!
//! ## Architecture
//!
//! - **`tar`**: Opens the archive and maps every header onto a `Member`.
//! - **`compression`**: Sniffs magic bytes and wraps the stream in a gzip, xz
//!   or zstd decoder.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarstats::common::archive;
//!
//! # fn main() -> tarstats::core::error::Result<()> {
//! let members = archive::tar::list_members("images.tar.xz")?;
//! println!("{} members", members.len());
//! # Ok(())
//! # }
//! ```
//!

pub mod compression;
pub mod tar;
