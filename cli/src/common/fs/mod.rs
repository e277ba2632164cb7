//! # Tarstats Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! - **`io`**: metadata lookups such as [`io::file_len`].
//!

pub mod io;
