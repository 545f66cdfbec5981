//! Divisibility: factors, common divisors, primes and odd numbers.

use primer_common::{Result, validate};
use tracing::trace;

/// Exclusive bound of the search in [`sum_of_fizzbuzz_multiples`].
const FIZZBUZZ_LIMIT: i32 = 1000;

/// All positive divisors of `number`, ascending.
pub fn factors(number: i32) -> Result<Vec<i32>> {
    let number: i32 = validate::at_least("number", number, 1)?;
    Ok((1..=number).filter(|candidate| number % candidate == 0).collect())
}

/// Greatest common divisor of two numbers that are both at least 10.
///
/// Euclid's algorithm; it agrees with scanning every candidate up to the smaller operand.
pub fn greatest_common_divisor(first: i32, second: i32) -> Result<i32> {
    let mut first: i32 = validate::at_least("first", first, 10)?;
    let mut second: i32 = validate::at_least("second", second, 10)?;

    while second != 0 {
        let remainder: i32 = first % second;
        first = second;
        second = remainder;
    }
    Ok(first)
}

/// Whether `number` equals the sum of its proper divisors.
pub fn is_perfect_number(number: i32) -> Result<bool> {
    let number: i32 = validate::at_least("number", number, 1)?;
    let divisor_sum: i64 = (1..number)
        .filter(|candidate| number % candidate == 0)
        .map(i64::from)
        .sum();
    Ok(divisor_sum == i64::from(number))
}

/// Trial division up to the square root. Numbers below 2 are not prime.
pub fn is_prime(number: i32) -> bool {
    if number < 2 {
        return false;
    }
    let number: i64 = i64::from(number);
    let mut divisor: i64 = 2;
    while divisor * divisor <= number {
        if number % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// The first `limit` primes in `start..end`.
pub fn primes_between(start: i32, end: i32, limit: usize) -> Result<Vec<i32>> {
    let (start, end) = validate::ordered(start, end)?;
    let primes: Vec<i32> = (start..end).filter(|n| is_prime(*n)).take(limit).collect();
    trace!(start, end, limit, found = primes.len(), "prime search finished");
    Ok(primes)
}

/// Whether `number` is odd. Negative numbers never are.
pub fn is_odd(number: i32) -> bool {
    number >= 0 && number % 2 != 0
}

/// Even numbers in `start..=finish`, ascending.
pub fn even_numbers_between(start: i32, finish: i32) -> Result<Vec<i32>> {
    let (start, finish) = validate::ordered(start, finish)?;
    let evens: Vec<i32> = (start..=finish).filter(|n| n % 2 == 0).collect();
    trace!(start, finish, found = evens.len(), "even number search finished");
    Ok(evens)
}

/// Sum of the odd numbers in `start..=end`, with `start` positive.
///
/// Uses the arithmetic series formula over the first and last odd member,
/// which gives the same total as adding every odd number in turn.
pub fn sum_odd(start: i32, end: i32) -> Result<i64> {
    let start: i32 = validate::at_least("start", start, 1)?;
    let (start, end) = validate::ordered(start, end)?;

    let first: i64 = i64::from(start | 1);
    let last: i64 = if is_odd(end) {
        i64::from(end)
    } else {
        i64::from(end) - 1
    };

    if first > last {
        return Ok(0);
    }
    let count: i64 = (last - first) / 2 + 1;
    Ok(count * (first + last) / 2)
}

/// Sum of the first `count` numbers below 1000 divisible by both 3 and 5.
pub fn sum_of_fizzbuzz_multiples(count: usize) -> i32 {
    (1..FIZZBUZZ_LIMIT)
        .filter(|n| n % 3 == 0 && n % 5 == 0)
        .take(count)
        .sum()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use primer_common::{InputError, Sentinel};

    #[test]
    fn test_factors() {
        assert_eq!(factors(6), Ok(vec![1, 2, 3, 6]));
        assert_eq!(factors(32), Ok(vec![1, 2, 4, 8, 16, 32]));
        assert_eq!(factors(10), Ok(vec![1, 2, 5, 10]));
        assert_eq!(factors(1), Ok(vec![1]));
        assert!(matches!(
            factors(-1),
            Err(InputError::BelowMinimum { name: "number", .. })
        ));
        assert!(factors(0).is_err());
    }

    #[test]
    fn test_greatest_common_divisor() {
        assert_eq!(greatest_common_divisor(25, 15), Ok(5));
        assert_eq!(greatest_common_divisor(12, 30), Ok(6));
        assert_eq!(greatest_common_divisor(81, 153), Ok(9));
        assert_eq!(greatest_common_divisor(17, 13), Ok(1));
        assert_eq!(greatest_common_divisor(10, 10), Ok(10));
        assert_eq!(greatest_common_divisor(9, 18).or_sentinel(), -1);
        assert_eq!(greatest_common_divisor(18, 9).or_sentinel(), -1);
    }

    #[test]
    fn test_greatest_common_divisor_matches_exhaustive_scan() {
        for first in 10..60 {
            for second in 10..60 {
                let expected: i32 = (1..=first.min(second))
                    .filter(|d| first % d == 0 && second % d == 0)
                    .max()
                    .unwrap();
                assert_eq!(greatest_common_divisor(first, second), Ok(expected));
            }
        }
    }

    #[test]
    fn test_is_perfect_number() {
        assert_eq!(is_perfect_number(6), Ok(true));
        assert_eq!(is_perfect_number(28), Ok(true));
        assert_eq!(is_perfect_number(496), Ok(true));
        assert_eq!(is_perfect_number(5), Ok(false));
        assert_eq!(is_perfect_number(1), Ok(false));
        assert!(!is_perfect_number(-1).or_sentinel());
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<i32> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(1));
        assert!(!is_prime(-7));
        assert!(is_prime(2_147_483_647));
    }

    #[test]
    fn test_primes_between() {
        assert_eq!(
            primes_between(10, 50, 6),
            Ok(vec![11, 13, 17, 19, 23, 29])
        );
        assert_eq!(primes_between(10, 20, 10), Ok(vec![11, 13, 17, 19]));
        assert_eq!(primes_between(24, 28, 3), Ok(vec![]));
        assert_eq!(primes_between(10, 50, 0), Ok(vec![]));
        assert!(matches!(
            primes_between(50, 10, 6),
            Err(InputError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_is_odd() {
        assert!(is_odd(123));
        assert!(is_odd(1));
        assert!(!is_odd(0));
        assert!(!is_odd(2));
        assert!(!is_odd(-3));
    }

    #[test]
    fn test_even_numbers_between() {
        assert_eq!(
            even_numbers_between(5, 21),
            Ok(vec![6, 8, 10, 12, 14, 16, 18, 20])
        );
        assert_eq!(even_numbers_between(4, 4), Ok(vec![4]));
        assert_eq!(even_numbers_between(7, 7), Ok(vec![]));
        assert_eq!(even_numbers_between(-4, 1), Ok(vec![-4, -2, 0]));
        assert!(matches!(
            even_numbers_between(20, 4),
            Err(InputError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_sum_odd() {
        assert_eq!(sum_odd(1, 100), Ok(2500));
        assert_eq!(sum_odd(13, 13), Ok(13));
        assert_eq!(sum_odd(14, 14), Ok(0));
        assert_eq!(sum_odd(2, 5), Ok(8));
        assert_eq!(sum_odd(100, 1000), Ok(247500));
        assert_eq!(sum_odd(13, 12345), Ok(38_105_893));
    }

    #[test]
    fn test_sum_odd_matches_loop() {
        for start in 1..40 {
            for end in start..60 {
                let expected: i64 = (start..=end).filter(|n| is_odd(*n)).map(i64::from).sum();
                assert_eq!(sum_odd(start, end), Ok(expected), "{start}..={end}");
            }
        }
    }

    #[test]
    fn test_sum_odd_invalid() {
        assert_eq!(sum_odd(10, 9).or_sentinel(), -1);
        assert_eq!(sum_odd(0, 100).or_sentinel(), -1);
        assert_eq!(sum_odd(-1, 100).or_sentinel(), -1);
        assert_eq!(sum_odd(1, i32::MAX), Ok(1_152_921_504_606_846_976));
    }

    #[test]
    fn test_sum_of_fizzbuzz_multiples() {
        assert_eq!(sum_of_fizzbuzz_multiples(5), 225);
        assert_eq!(sum_of_fizzbuzz_multiples(1), 15);
        assert_eq!(sum_of_fizzbuzz_multiples(0), 0);
        // Only 66 multiples of 15 exist below 1000.
        assert_eq!(sum_of_fizzbuzz_multiples(1000), 15 * (66 * 67 / 2));
    }
}
