//! # Tarstats Summary Counters (`stats`)
//!
//! File: cli/src/stats.rs
//!
//! ## Overview
//!
//! [`Stats`] holds the counters gathered from one archive, or the running
//! total over several. It renders itself in two ways:
//!
//! - [`Stats::to_mapping`] / [`Stats::to_json`]: the exact, machine-readable
//!   form. Keys appear in the order `type`, `name`, `size`, `filesize`,
//!   `files`, `dirs`, `symlinks`, `hardlinks`, `dev`. Numbers are never scaled.
//! - [`Stats::to_text`]: one `key: value` line per field, optionally with
//!   human-scaled numbers.
//!
//! ## Examples
//!
//! ```rust
//! use tarstats::stats::Stats;
//!
//! let mut a = Stats::new("a.tar");
//! a.file_count = 2;
//! a.content_size = 4096;
//!
//! let mut total = Stats::total();
//! total.accumulate(&a).accumulate(&a);
//! assert_eq!(total.file_count, 4);
//! assert_eq!(total.name, "total");
//! ```
//!
use crate::common::ui::human::{rounded_units, thousands};
use crate::core::error::Result;
use serde::Serialize;

/// Name given to the aggregate instance.
pub const TOTAL_NAME: &str = "total";

/// Summary counters for a tar archive, or for a total over archives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Archive path, or `"total"` for the aggregate.
    pub name: String,
    /// Marks the aggregate; only changes the rendered `type`.
    pub is_total: bool,
    /// Sum of regular-file sizes inside the archive.
    pub content_size: u64,
    /// Byte length of the archive file on disk.
    pub archive_file_size: u64,
    pub file_count: u64,
    pub dir_count: u64,
    pub symlink_count: u64,
    pub hardlink_count: u64,
    pub device_count: u64,
}

/// Ordered, serializable view of a [`Stats`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRecord<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub size: u64,
    pub filesize: u64,
    pub files: u64,
    pub dirs: u64,
    pub symlinks: u64,
    pub hardlinks: u64,
    pub dev: u64,
}

/// Adds `other` into `counter`, panicking rather than wrapping on overflow.
pub(crate) fn add(counter: &mut u64, other: u64) {
    *counter = counter
        .checked_add(other)
        .expect("archive counter overflowed u64");
}

impl Stats {
    /// Creates a zeroed per-archive instance.
    pub fn new(name: impl Into<String>) -> Self {
        Stats {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a zeroed aggregate named `"total"`.
    pub fn total() -> Self {
        Stats {
            name: TOTAL_NAME.to_string(),
            is_total: true,
            ..Default::default()
        }
    }

    /// Adds every counter of `other` into `self` and returns `self` for chaining.
    ///
    /// `name` and `is_total` are left untouched.
    pub fn accumulate(&mut self, other: &Stats) -> &mut Self {
        add(&mut self.content_size, other.content_size);
        add(&mut self.archive_file_size, other.archive_file_size);
        add(&mut self.file_count, other.file_count);
        add(&mut self.dir_count, other.dir_count);
        add(&mut self.symlink_count, other.symlink_count);
        add(&mut self.hardlink_count, other.hardlink_count);
        add(&mut self.device_count, other.device_count);
        self
    }

    /// Number of members that matched one of the five recognized kinds.
    pub fn member_count(&self) -> u64 {
        self.file_count
            + self.dir_count
            + self.symlink_count
            + self.hardlink_count
            + self.device_count
    }

    fn kind(&self) -> &'static str {
        if self.is_total {
            "total"
        } else {
            "archive"
        }
    }

    pub fn to_mapping(&self) -> StatsRecord<'_> {
        StatsRecord {
            kind: self.kind(),
            name: &self.name,
            size: self.content_size,
            filesize: self.archive_file_size,
            files: self.file_count,
            dirs: self.dir_count,
            symlinks: self.symlink_count,
            hardlinks: self.hardlink_count,
            dev: self.device_count,
        }
    }

    /// Compact single-line JSON object, suitable for JSON Lines output.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_mapping())?)
    }

    /// Renders the `key: value` block, one field per line, ending in a newline.
    ///
    /// With `human`, sizes get unit suffixes and counters get thousands separators.
    pub fn to_text(&self, human: bool) -> Result<String> {
        Ok(format!(
            "type: {}\n\
             name: {}\n\
             size: {}\n\
             filesize: {}\n\
             files: {}\n\
             dirs: {}\n\
             symlinks: {}\n\
             hardlinks: {}\n\
             devices: {}\n",
            self.kind(),
            self.name,
            rounded_units(self.content_size, human)?,
            rounded_units(self.archive_file_size, human)?,
            thousands(self.file_count, human),
            thousands(self.dir_count, human),
            thousands(self.symlink_count, human),
            thousands(self.hardlink_count, human),
            thousands(self.device_count, human),
        ))
    }
}
