//! # Tarstats Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: a command builder
//! for the compiled `tarstats` binary and generators for fixture archives.
//!
//! The reference fixture holds two regular files (102400 + 10240 = 112640
//! content bytes), one directory and one symlink, gzip compressed.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Content bytes of the reference fixture.
pub const FIXTURE_CONTENT_SIZE: u64 = 112640;

/// # Get Tarstats Command (`tarstats_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `tarstats` binary. The
/// environment is scrubbed so a developer's own config file cannot leak into
/// the assertions.
///
/// ## Panics
/// Panics if the `tarstats` binary cannot be found via `Command::cargo_bin`.
pub fn tarstats_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("tarstats").expect("Failed to find tarstats binary for testing");
    cmd.env_remove("TARSTATS_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

fn header(entry_type: tar::EntryType, size: u64) -> tar::Header {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(entry_type);
    header.set_size(size);
    header.set_mode(0o644);
    header.set_mtime(0);
    header
}

fn append_reference_members<W: Write>(builder: &mut tar::Builder<W>) -> io::Result<()> {
    builder.append_data(&mut header(tar::EntryType::Directory, 0), "testtar/", io::empty())?;

    let big = vec![b'x'; 102400];
    builder.append_data(
        &mut header(tar::EntryType::Regular, big.len() as u64),
        "testtar/big.bin",
        big.as_slice(),
    )?;

    let small = vec![b'y'; 10240];
    builder.append_data(
        &mut header(tar::EntryType::Regular, small.len() as u64),
        "testtar/small.bin",
        small.as_slice(),
    )?;

    builder.append_link(&mut header(tar::EntryType::Symlink, 0), "testtar/link", "big.bin")?;
    Ok(())
}

/// Writes the gzip-compressed reference fixture into `dir` and returns its path.
pub fn write_reference_tgz(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture file");
    let mut builder = tar::Builder::new(GzEncoder::new(file, flate2::Compression::best()));
    append_reference_members(&mut builder).expect("Failed to append fixture members");
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream");
    path
}

/// Writes the reference fixture uncompressed.
pub fn write_reference_tar(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture file");
    let mut builder = tar::Builder::new(file);
    append_reference_members(&mut builder).expect("Failed to append fixture members");
    builder.finish().expect("Failed to finish tar stream");
    path
}

/// Writes the reference fixture compressed with bzip2.
pub fn write_reference_tbz2(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture file");
    let encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::best());
    let mut builder = tar::Builder::new(encoder);
    append_reference_members(&mut builder).expect("Failed to append fixture members");
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish bzip2 stream");
    path
}

/// Writes the reference fixture compressed with xz.
pub fn write_reference_txz(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture file");
    let mut builder = tar::Builder::new(xz2::write::XzEncoder::new(file, 6));
    append_reference_members(&mut builder).expect("Failed to append fixture members");
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish xz stream");
    path
}

/// Writes the reference fixture compressed with zstd.
pub fn write_reference_tzst(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture file");
    let encoder = zstd::stream::write::Encoder::new(file, 3).expect("Failed to create zstd encoder");
    let mut builder = tar::Builder::new(encoder);
    append_reference_members(&mut builder).expect("Failed to append fixture members");
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish zstd stream");
    path
}

/// On-disk size of a generated fixture.
pub fn disk_size(path: &Path) -> u64 {
    std::fs::metadata(path).expect("Failed to stat fixture").len()
}
