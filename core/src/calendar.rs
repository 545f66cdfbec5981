//! Gregorian calendar lookups.

use primer_common::{Result, validate};

/// Years the calendar exercises accept.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Whether `year` (1-9999) is a leap year.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
pub fn is_leap_year(year: i32) -> Result<bool> {
    let year: i32 = validate::in_range("year", year, YEAR_RANGE)?;
    Ok(year % 4 == 0 && (year % 100 != 0 || year % 400 == 0))
}

/// Number of days in `month` (1-12) of `year` (1-9999).
pub fn days_in_month(month: i32, year: i32) -> Result<i32> {
    let month: i32 = validate::in_range("month", month, 1..=12)?;
    let leap: bool = is_leap_year(year)?;

    let days: i32 = match month {
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => 31,
    };
    Ok(days)
}

/// Name of the weekday numbered from `0` (Sunday) to `6` (Saturday).
pub fn day_of_week(day: i32) -> Result<&'static str> {
    let day: i32 = validate::in_range("day", day, 0..=6)?;
    Ok(DAY_NAMES[day as usize])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
