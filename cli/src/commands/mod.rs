//! # Tarstats Commands Module
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Handlers invoked by the CLI driver in `main.rs`. Each handler owns its clap
//! argument struct and writes its output to a caller-supplied writer.
//!
//! - **`report`**: scans archives and prints their stats as text or JSON Lines
//!
pub mod report;
