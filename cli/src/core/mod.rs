//! # Tarstats Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the library and the CLI:
//! - `config`: Optional TOML file with output defaults
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use tarstats::core::config; // For loading configuration
//! use tarstats::core::error::{Result, TarstatsError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
