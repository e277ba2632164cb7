//! # Tarstats TAR Member Listing (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module reads a tar archive and reduces each member to the two facts the
//! scanner needs: what kind of member it is and how many content bytes it holds.
//!
//! ## Architecture
//!
//! - The archive file is opened, sniffed for compression (see
//!   [`super::compression`]) and handed to the `tar` crate.
//! - `tar::Archive::entries` walks the headers. GNU long-name and pax extension
//!   records are folded into the following entry by the library, so they never
//!   show up as members.
//! - Each header type flag is mapped onto a [`MemberKind`]. Type flags are
//!   mutually exclusive, so every member lands in exactly one kind.
//! - The file handle lives only for the duration of [`list_members`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarstats::common::archive::tar::{self, MemberKind};
//!
//! # fn main() -> tarstats::core::error::Result<()> {
//! let members = tar::list_members("backup.tgz")?;
//! let dirs = members.iter().filter(|m| m.kind == MemberKind::Directory).count();
//! println!("{dirs} directories");
//! # Ok(())
//! # }
//! ```
//!
use super::compression;
use crate::core::error::{Result, TarstatsError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tar::EntryType;
use tracing::{debug, trace};

/// Classification of a single archive member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    File,
    Directory,
    Symlink,
    Hardlink,
    /// Character or block device node.
    Device,
    /// FIFOs, pax global headers and unknown type flags.
    Other,
}

impl From<EntryType> for MemberKind {
    fn from(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Regular | EntryType::Continuous | EntryType::GNUSparse => MemberKind::File,
            EntryType::Directory => MemberKind::Directory,
            EntryType::Symlink => MemberKind::Symlink,
            EntryType::Link => MemberKind::Hardlink,
            EntryType::Char | EntryType::Block => MemberKind::Device,
            _ => MemberKind::Other,
        }
    }
}

/// One archive member descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    /// Logical content size as recorded in the header.
    pub size: u64,
}

/// Opens the archive at `path` and returns its members in archive order.
///
/// ## Errors
///
/// - [`TarstatsError::ArchiveNotFound`] if the file cannot be opened.
/// - [`TarstatsError::ArchiveRead`] if the file is empty, or the decompressor
///   or the tar reader fails.
pub fn list_members<P: AsRef<Path>>(path: P) -> Result<Vec<Member>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TarstatsError::ArchiveNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = compression::decompressed(BufReader::new(file)).map_err(|source| {
        TarstatsError::ArchiveRead {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let members = read_members(reader).map_err(|source| TarstatsError::ArchiveRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Listed {} members from {}", members.len(), path.display());
    Ok(members)
}

/// Lists the members of an uncompressed tar stream.
pub fn read_members<R: Read>(reader: R) -> io::Result<Vec<Member>> {
    let mut archive = tar::Archive::new(reader);
    let mut members = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        let entry_type = entry.header().entry_type();
        let kind = MemberKind::from(entry_type);
        if kind == MemberKind::Other {
            trace!("Unclassified member type {:?}", entry_type);
        }
        members.push(Member {
            kind,
            size: entry.size(),
        });
    }
    Ok(members)
}
