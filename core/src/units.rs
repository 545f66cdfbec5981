//! Unit conversions: storage sizes, lengths, weights and simple interest.

use std::fmt;

use primer_common::{Result, validate};

const KILOBYTES_PER_MEGABYTE: i32 = 1024;
const INCHES_PER_FOOT: f64 = 12.0;
const CENTIMETERS_PER_INCH: f64 = 2.54;
const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// A kilobyte count split into whole megabytes and leftover kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageSize {
    pub kilobytes: i32,
    pub megabytes: i32,
    pub remaining_kilobytes: i32,
}

impl fmt::Display for StorageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} KB = {} MB and {} KB",
            self.kilobytes, self.megabytes, self.remaining_kilobytes
        )
    }
}

pub fn storage_size(kilobytes: i32) -> Result<StorageSize> {
    let kilobytes: i32 = validate::non_negative("kilobytes", kilobytes)?;
    Ok(StorageSize {
        kilobytes,
        megabytes: kilobytes / KILOBYTES_PER_MEGABYTE,
        remaining_kilobytes: kilobytes % KILOBYTES_PER_MEGABYTE,
    })
}

/// Length given in feet plus 0-12 inches, in centimeters.
pub fn feet_and_inches_to_cm(feet: f64, inches: f64) -> Result<f64> {
    let feet: f64 = validate::non_negative("feet", feet)?;
    let inches: f64 = validate::in_range("inches", inches, 0.0..=INCHES_PER_FOOT)?;

    let centimeters: f64 = (feet * INCHES_PER_FOOT) * CENTIMETERS_PER_INCH;
    Ok(centimeters + inches * CENTIMETERS_PER_INCH)
}

/// Whole feet and leftover inches in a length given in inches.
pub fn feet_and_inches(inches: f64) -> Result<(f64, f64)> {
    let inches: f64 = validate::non_negative("inches", inches)?;
    Ok(((inches / INCHES_PER_FOOT).trunc(), inches % INCHES_PER_FOOT))
}

/// Length in inches, in centimeters. Goes through whole feet and leftover inches.
pub fn inches_to_cm(inches: f64) -> Result<f64> {
    let (feet, remaining_inches) = feet_and_inches(inches)?;
    feet_and_inches_to_cm(feet, remaining_inches)
}

pub fn pounds_to_kg(pounds: f64) -> Result<f64> {
    let pounds: f64 = validate::non_negative("pounds", pounds)?;
    Ok(pounds * KILOGRAMS_PER_POUND)
}

/// Simple interest earned on `amount` at `interest_rate` percent.
pub fn calculate_interest(amount: f64, interest_rate: f64) -> f64 {
    amount * (interest_rate / 100.0)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
