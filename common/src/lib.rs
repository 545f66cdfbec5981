//! # Primer Common
//!
//! Shared building blocks for the exercise crates:
//!
//! * **[`error`]**: the [`InputError`] type every exercise reports invalid input with.
//! * **[`sentinel`]**: conversion of a result back into the classic in-band sentinel.
//! * **[`validate`]**: guard helpers that reject out-of-domain inputs.
//! * **[`config`]**: runtime options shared between the CLI and the library.
//! * **[`utils`]**: small formatting helpers.
//!
//! The crate also exports the `info!`, `success!`, `warn!` and `error!` macros. They are
//! thin wrappers over `tracing` with fixed targets, so a subscriber can decorate them.

pub mod config;
pub mod error;
pub mod sentinel;
pub mod utils;
pub mod validate;

pub use error::{InputError, Result};
pub use sentinel::Sentinel;

#[doc(hidden)]
pub use tracing as __tracing;

/// Emits a neutral status line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "primer::info", $($arg)*)
    };
}

/// Emits a status line that reports a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "primer::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "primer::warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: "primer::error", $($arg)*)
    };
}
