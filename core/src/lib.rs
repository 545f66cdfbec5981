//! # Primer Core
//!
//! The exercises themselves. Every exercise is a plain function from scalars to a
//! [`primer_common::Result`]: invalid input is an [`primer_common::InputError`], never an
//! in-band value. Call `.or_sentinel()` to get the classic `-1` / `false` behaviour back.
//!
//! ## Modules
//! * **[`geometry`]**, **[`compare`]**, **[`digits`]**, **[`calendar`]**, **[`divisors`]**,
//!   **[`scoring`]**, **[`time`]**, **[`units`]**, **[`switches`]**: the exercises, grouped by topic.
//! * **[`catalog`]**: names every exercise and evaluates it from textual arguments.
//! * **[`tour`]**: the example session of each exercise.

pub mod calendar;
pub mod catalog;
pub mod compare;
pub mod digits;
pub mod divisors;
pub mod geometry;
pub mod scoring;
pub mod switches;
pub mod time;
pub mod tour;
pub mod units;
