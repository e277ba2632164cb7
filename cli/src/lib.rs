//! # Tarstats Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Summary statistics over tar archives. For each archive it counts regular
//! files, directories, symbolic links, hard links and device nodes. It also
//! records the uncompressed content size and the on-disk archive size, and can
//! fold several archives into one total.
//!
//! ## Architecture
//!
//! - `scanner`: `scan_one` / `scan_many`, the entry points
//! - `stats`: the `Stats` value object and its text / JSON renderings
//! - `commands`: the report printed by the `tarstats` binary
//! - `common`: archive listing, filesystem metadata, number formatting
//! - `core`: errors and configuration
//!
//! ## Examples
//!
//! ```rust,no_run
//! use tarstats::scanner::scan_one;
//!
//! # fn main() -> tarstats::core::error::Result<()> {
//! let stats = scan_one("release.tgz")?;
//! println!("{}", stats.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod scanner;
pub mod stats;
