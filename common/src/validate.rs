//! Guards used at the top of every exercise.
//!
//! Each helper returns the checked value on success so it can be bound directly:
//!
//! ```
//! use primer_common::validate;
//!
//! let year = validate::in_range("year", 2024, 1..=9999).unwrap();
//! assert_eq!(year, 2024);
//! assert!(validate::non_negative("radius", -1.0).is_err());
//! ```

use std::fmt::Display;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{InputError, Result};

/// Numeric parameter types the guards understand.
pub trait Scalar: Copy + PartialOrd + Display {
    const ZERO: Self;

    fn as_f64(self) -> f64;

    fn is_finite(self) -> bool {
        true
    }
}

impl Scalar for i32 {
    const ZERO: Self = 0;

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for i64 {
    const ZERO: Self = 0;

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    fn as_f64(self) -> f64 {
        self
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Refuses NaN and the infinities. Every bound check below runs this first.
fn finite<T: Scalar>(name: &'static str, value: T) -> Result<T> {
    if !value.is_finite() {
        debug!(parameter = name, %value, "rejected non-finite input");
        return Err(InputError::NotFinite {
            name,
            value: value.as_f64(),
        });
    }
    Ok(value)
}

/// Rejects values below zero.
pub fn non_negative<T: Scalar>(name: &'static str, value: T) -> Result<T> {
    let value: T = finite(name, value)?;
    if value < T::ZERO {
        debug!(parameter = name, %value, "rejected negative input");
        return Err(InputError::Negative {
            name,
            value: value.as_f64(),
        });
    }
    Ok(value)
}

/// Rejects values outside an inclusive range.
pub fn in_range<T: Scalar>(name: &'static str, value: T, range: RangeInclusive<T>) -> Result<T> {
    let value: T = finite(name, value)?;
    if !range.contains(&value) {
        debug!(
            parameter = name,
            %value,
            min = %range.start(),
            max = %range.end(),
            "rejected out of range input"
        );
        return Err(InputError::OutOfRange {
            name,
            value: value.as_f64(),
            min: range.start().as_f64(),
            max: range.end().as_f64(),
        });
    }
    Ok(value)
}

/// Rejects values under `min`.
pub fn at_least<T: Scalar>(name: &'static str, value: T, min: T) -> Result<T> {
    let value: T = finite(name, value)?;
    if value < min {
        debug!(parameter = name, %value, %min, "rejected input below minimum");
        return Err(InputError::BelowMinimum {
            name,
            value: value.as_f64(),
            min: min.as_f64(),
        });
    }
    Ok(value)
}

/// Rejects an interval whose end precedes its start.
pub fn ordered<T: Scalar>(start: T, end: T) -> Result<(T, T)> {
    if end < start {
        debug!(%start, %end, "rejected inverted range");
        return Err(InputError::InvertedRange {
            start: start.as_f64(),
            end: end.as_f64(),
        });
    }
    Ok((start, end))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
