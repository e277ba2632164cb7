//! # Tarstats Human-Readable Numbers (`common::ui::human`)
//!
//! File: cli/src/common/ui/human.rs
//!
//! ## Overview
//!
//! Pure functions that turn raw counters into strings for the text report.
//! Both take a `human` switch: when it is off they return the plain decimal
//! form, so callers can pass the CLI setting straight through.
//!
//! - [`thousands`]: `1234567` → `"1,234,567"`
//! - [`rounded_units`]: `1234` → `"1K"`, `2_500_000` → `"2M"`
//!
//! `rounded_units` truncates at every step. It never rounds up and never shows a
//! fraction, so `1999` is rendered as `"1K"`.
//!
use crate::core::error::{Result, TarstatsError};

/// Unit letters for successive powers of 1000, starting at kilo.
const UNITS: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

/// Formats `number` with a `,` between every group of three digits when `human` is set.
pub fn thousands(number: impl Into<i128>, human: bool) -> String {
    let number = number.into();
    if !human {
        return number.to_string();
    }

    let digits = number.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if number < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Scales `number` down by 1000 while it exceeds 1000 and appends the unit letter.
///
/// # Errors
///
/// - [`TarstatsError::NegativeValue`] for negative input (only when `human` is set).
/// - [`TarstatsError::RangeExceeded`] when the magnitude is beyond the last unit.
pub fn rounded_units(number: impl Into<i128>, human: bool) -> Result<String> {
    let original = number.into();
    if !human {
        return Ok(original.to_string());
    }
    if original < 0 {
        return Err(TarstatsError::NegativeValue(original).into());
    }

    let mut scaled = original;
    let mut divisions = 0usize;
    while scaled > 1000 {
        scaled /= 1000;
        divisions += 1;
    }

    match divisions {
        0 => Ok(scaled.to_string()),
        n if n >= UNITS.len() => Err(TarstatsError::RangeExceeded(original).into()),
        n => Ok(format!("{}{}", scaled, UNITS[n - 1])),
    }
}
