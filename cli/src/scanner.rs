//! # Tarstats Archive Scanner (`scanner`)
//!
//! File: cli/src/scanner.rs
//!
//! ## Overview
//!
//! The scanner turns archive paths into [`Stats`] values.
//!
//! - [`scan_one`] lists one archive's members, tallies them by kind, and
//!   records the archive's on-disk size.
//! - [`scan_many`] scans a batch strictly in input order and folds every
//!   result into a `"total"` aggregate.
//!
//! Archives are processed one at a time. Each file is closed before the next
//! one is opened, and the first failure ends the batch.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use tarstats::scanner;
//!
//! # fn main() -> tarstats::core::error::Result<()> {
//! let (archives, total) = scanner::scan_many(&["a.tgz", "b.tar.xz"])?;
//! for stats in &archives {
//!     print!("{}", stats.to_text(false)?);
//! }
//! print!("{}", total.to_text(true)?);
//! # Ok(())
//! # }
//! ```
//!
use crate::common::archive::tar::{self, Member, MemberKind};
use crate::common::fs::io;
use crate::core::error::Result;
use crate::stats::{add, Stats};
use std::path::Path;
use tracing::{debug, info};

/// Adds one member to the per-kind counters of `stats`.
///
/// Only regular files contribute to `content_size`.
pub fn tally(stats: &mut Stats, member: &Member) {
    match member.kind {
        MemberKind::File => {
            add(&mut stats.content_size, member.size);
            add(&mut stats.file_count, 1);
        }
        MemberKind::Directory => add(&mut stats.dir_count, 1),
        MemberKind::Symlink => add(&mut stats.symlink_count, 1),
        MemberKind::Hardlink => add(&mut stats.hardlink_count, 1),
        MemberKind::Device => add(&mut stats.device_count, 1),
        MemberKind::Other => {}
    }
}

/// Scans the archive at `path` and returns its summary counters.
///
/// The resulting `name` is the path exactly as given.
///
/// ## Errors
///
/// Fails with `TarstatsError::ArchiveNotFound` if the archive cannot be opened
/// and `TarstatsError::ArchiveRead` if its member list cannot be read.
pub fn scan_one<P: AsRef<Path>>(path: P) -> Result<Stats> {
    let path = path.as_ref();
    debug!("Scanning archive {}", path.display());

    let members = tar::list_members(path)?;

    let mut stats = Stats::new(path.to_string_lossy());
    for member in &members {
        tally(&mut stats, member);
    }
    stats.archive_file_size = io::file_len(path)?;

    debug!(
        "{}: {} of {} members classified",
        path.display(),
        stats.member_count(),
        members.len()
    );
    Ok(stats)
}

/// Scans every path in order and returns the per-archive results plus their total.
///
/// Duplicate paths are scanned again and appear once per occurrence. The
/// first error aborts the batch and no partial results are returned.
pub fn scan_many<I, P>(paths: I) -> Result<(Vec<Stats>, Stats)>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut archives = Vec::new();
    let mut total = Stats::total();

    for path in paths {
        let stats = scan_one(path)?;
        total.accumulate(&stats);
        archives.push(stats);
    }

    info!("Scanned {} archive(s)", archives.len());
    Ok((archives, total))
}
