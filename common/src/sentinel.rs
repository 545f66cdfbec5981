//! # Legacy Sentinels
//!
//! The exercises were first written to signal bad input in-band: `-1` for numbers,
//! `false` for predicates and a fixed message for strings. [`Sentinel`] collapses a
//! [`Result`](crate::Result) back into that form, which is what the example transcripts
//! print.

use crate::error::Result;

/// Message returned by string-producing exercises on invalid input.
pub const INVALID_VALUE_MESSAGE: &str = "Invalid value";

/// Line printed by exercises that report invalid input on the console.
pub const INVALID_VALUE_PRINTOUT: &str = "Invalid Value";

pub trait Sentinel {
    type Output;

    /// Returns the computed value, or the in-band sentinel if the input was rejected.
    fn or_sentinel(self) -> Self::Output;
}

impl Sentinel for Result<i32> {
    type Output = i32;

    fn or_sentinel(self) -> i32 {
        self.unwrap_or(-1)
    }
}

impl Sentinel for Result<i64> {
    type Output = i64;

    fn or_sentinel(self) -> i64 {
        self.unwrap_or(-1)
    }
}

impl Sentinel for Result<f64> {
    type Output = f64;

    fn or_sentinel(self) -> f64 {
        self.unwrap_or(-1.0)
    }
}

impl Sentinel for Result<bool> {
    type Output = bool;

    fn or_sentinel(self) -> bool {
        self.unwrap_or(false)
    }
}

impl Sentinel for Result<String> {
    type Output = String;

    fn or_sentinel(self) -> String {
        self.unwrap_or_else(|_| INVALID_VALUE_MESSAGE.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
