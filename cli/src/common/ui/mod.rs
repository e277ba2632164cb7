//! # Tarstats UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Presentation helpers for terminal output. The formatting here is pure and
//! deterministic: the same counters always render to the same strings.
//!
//! - **`human`**: thousands separators and truncating unit suffixes.
//!

pub mod human;
