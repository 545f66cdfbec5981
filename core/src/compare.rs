//! Predicates built from comparisons and boolean logic.

use std::fmt;

use primer_common::{Result, validate};

/// Hours of the day before which a barking dog wakes its owner.
const EARLY_HOURS_END: i32 = 8;

/// Late hour during which a barking dog wakes its owner.
const LATE_HOUR: i32 = 23;

/// Whether a dog barking at `hour` (0-23) should wake its owner.
///
/// Only barking before 08:00 or during the 23:00 hour counts.
pub fn should_wake_up(barking: bool, hour: i32) -> Result<bool> {
    let hour: i32 = validate::in_range("hour", hour, 0..=23)?;
    Ok(barking && (hour < EARLY_HOURS_END || hour == LATE_HOUR))
}

/// Compares two numbers on their first three decimal places, truncating the rest.
pub fn are_equal_by_three_decimal_places(first: f64, second: f64) -> bool {
    truncate_to_thousandths(first) == truncate_to_thousandths(second)
}

fn truncate_to_thousandths(value: f64) -> i64 {
    (value * 1000.0) as i64
}

/// Whether `a + b` equals `c`.
pub fn has_equal_sum(a: i32, b: i32, c: i32) -> bool {
    i64::from(a) + i64::from(b) == i64::from(c)
}

/// How three numbers relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equality {
    AllEqual,
    AllDifferent,
    /// Two numbers match and one differs.
    Mixed,
}

impl fmt::Display for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentence: &str = match self {
            Self::AllEqual => "All numbers are equal",
            Self::AllDifferent => "All numbers are different",
            Self::Mixed => "Neither all are equal or different",
        };
        f.write_str(sentence)
    }
}

/// Classifies three non-negative numbers as all equal, all different or mixed.
pub fn classify_three(a: i32, b: i32, c: i32) -> Result<Equality> {
    validate::non_negative("a", a)?;
    validate::non_negative("b", b)?;
    validate::non_negative("c", c)?;

    if a == b && b == c {
        Ok(Equality::AllEqual)
    } else if a != b && b != c && a != c {
        Ok(Equality::AllDifferent)
    } else {
        Ok(Equality::Mixed)
    }
}

/// Whether `number` lies in the teens (13-19).
pub fn is_teen(number: i32) -> bool {
    (13..=19).contains(&number)
}

/// Whether at least one of the three numbers is a teen.
pub fn has_teen(a: i32, b: i32, c: i32) -> bool {
    [a, b, c].into_iter().any(is_teen)
}

/// Whether the cat plays at `temperature`: 25-35 normally, up to 45 in summer.
pub fn is_cat_playing(summer: bool, temperature: i32) -> bool {
    let upper: i32 = if summer { 45 } else { 35 };
    (25..=upper).contains(&temperature)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
