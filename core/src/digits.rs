//! Exercises that take numbers apart digit by digit.
//!
//! All of them peel digits off the right with `% 10` and `/ 10`, so they follow the
//! truncating semantics of Rust integer division for negative inputs.

use primer_common::{Result, validate};

/// Operands accepted by [`has_same_last_digit`].
const LAST_DIGIT_RANGE: std::ops::RangeInclusive<i32> = 10..=1000;

/// Operands accepted by [`has_shared_digit`].
const TWO_DIGIT_RANGE: std::ops::RangeInclusive<i32> = 10..=99;

/// Yields the decimal digits of a non-negative number from right to left.
fn digits(mut number: i32) -> impl Iterator<Item = i32> {
    std::iter::from_fn(move || {
        if number <= 0 {
            return None;
        }
        let digit: i32 = number % 10;
        number /= 10;
        Some(digit)
    })
}

/// Sum of the even digits of `number`.
pub fn even_digit_sum(number: i32) -> Result<i32> {
    let number: i32 = validate::non_negative("number", number)?;
    Ok(digits(number).filter(|digit| digit % 2 == 0).sum())
}

/// Sum of the leftmost and rightmost digit. Single digit numbers count twice.
pub fn sum_first_and_last_digit(number: i32) -> Result<i32> {
    let number: i32 = validate::non_negative("number", number)?;

    let last_digit: i32 = number % 10;
    let mut first_digit: i32 = number;
    while first_digit >= 10 {
        first_digit /= 10;
    }

    Ok(first_digit + last_digit)
}

/// Sum of all digits of a number with at least two digits.
pub fn sum_digits(number: i32) -> Result<i32> {
    let number: i32 = validate::at_least("number", number, 10)?;
    Ok(digits(number).sum())
}

/// Whether `number` reads the same in both directions.
///
/// The sign survives the reversal, so `-121` is a palindrome.
pub fn is_palindrome(number: i32) -> bool {
    let original: i64 = i64::from(number);
    let mut remaining: i64 = original;
    let mut reversed: i64 = 0;

    while remaining != 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }

    reversed == original
}

/// Whether `number` is an accepted operand for [`has_same_last_digit`] (10-1000).
pub fn in_last_digit_range(number: i32) -> bool {
    LAST_DIGIT_RANGE.contains(&number)
}

/// Whether at least two of the numbers end in the same digit.
pub fn has_same_last_digit(first: i32, second: i32, third: i32) -> Result<bool> {
    let first: i32 = validate::in_range("first", first, LAST_DIGIT_RANGE)? % 10;
    let second: i32 = validate::in_range("second", second, LAST_DIGIT_RANGE)? % 10;
    let third: i32 = validate::in_range("third", third, LAST_DIGIT_RANGE)? % 10;

    Ok(first == second || first == third || second == third)
}

/// Whether two two-digit numbers have a digit in common.
pub fn has_shared_digit(first: i32, second: i32) -> Result<bool> {
    let first: i32 = validate::in_range("first", first, TWO_DIGIT_RANGE)?;
    let second: i32 = validate::in_range("second", second, TWO_DIGIT_RANGE)?;

    Ok(digits(first).any(|left| digits(second).any(|right| left == right)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
