//! Durations rendered as text.

use std::fmt;

use primer_common::utils::number::two_digits;
use primer_common::{Result, validate};

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const DAYS_PER_YEAR: i64 = 365;

/// `minutes` and `seconds` (0-59) as a zero padded `"HHh MMm SSs "`.
///
/// The trailing space is part of the format.
pub fn duration_string(minutes: i64, seconds: i64) -> Result<String> {
    let minutes: i64 = validate::non_negative("minutes", minutes)?;
    let seconds: i64 = validate::in_range("seconds", seconds, 0..=59)?;

    let hours: i64 = minutes / MINUTES_PER_HOUR;
    let remaining_minutes: i64 = minutes % MINUTES_PER_HOUR;

    Ok(format!(
        "{}h {}m {}s ",
        two_digits(hours),
        two_digits(remaining_minutes),
        two_digits(seconds)
    ))
}

/// A number of seconds as `"Hh Mm Ss "`, or `"Mm Ss "` below one hour. Not padded.
pub fn duration_from_seconds(seconds: i64) -> Result<String> {
    let seconds: i64 = validate::non_negative("seconds", seconds)?;

    let minutes: i64 = seconds / SECONDS_PER_MINUTE;
    let remaining_seconds: i64 = seconds % SECONDS_PER_MINUTE;

    if minutes >= MINUTES_PER_HOUR {
        let hours: i64 = minutes / MINUTES_PER_HOUR;
        let remaining_minutes: i64 = minutes % MINUTES_PER_HOUR;
        Ok(format!("{hours}h {remaining_minutes}m {remaining_seconds}s "))
    } else {
        Ok(format!("{minutes}m {remaining_seconds}s "))
    }
}

/// A span of minutes split into 365-day years and leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearsAndDays {
    pub minutes: i64,
    pub years: i64,
    pub days: i64,
}

impl fmt::Display for YearsAndDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min = {} y and {} d", self.minutes, self.years, self.days)
    }
}

pub fn years_and_days(minutes: i64) -> Result<YearsAndDays> {
    let minutes: i64 = validate::non_negative("minutes", minutes)?;
    let total_days: i64 = minutes / MINUTES_PER_HOUR / HOURS_PER_DAY;

    Ok(YearsAndDays {
        minutes,
        years: total_days / DAYS_PER_YEAR,
        days: total_days % DAYS_PER_YEAR,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
