#![cfg(test)]
use primer_common::{InputError, Sentinel};
use primer_core::{calendar, digits, divisors, geometry, time, units};
use rand::Rng;
use rand::rngs::ThreadRng;

const SAMPLES: usize = 200;

fn negative_ints(rng: &mut ThreadRng) -> Vec<i32> {
    (0..SAMPLES).map(|_| rng.random_range(i32::MIN..0)).collect()
}

fn negative_floats(rng: &mut ThreadRng) -> Vec<f64> {
    (0..SAMPLES).map(|_| rng.random_range(-1.0e6..-1.0e-9)).collect()
}

/*************************************************************
                 Rejection of negative input
**************************************************************/

#[test]
fn negative_numbers_give_the_integer_sentinel() {
    let mut rng: ThreadRng = rand::rng();
    for n in negative_ints(&mut rng) {
        assert_eq!(digits::even_digit_sum(n).or_sentinel(), -1, "even_digit_sum({n})");
        assert_eq!(digits::sum_first_and_last_digit(n).or_sentinel(), -1, "first_last({n})");
        assert_eq!(digits::sum_digits(n).or_sentinel(), -1, "sum_digits({n})");
        assert_eq!(divisors::sum_odd(n, 100).or_sentinel(), -1, "sum_odd({n}, 100)");
        assert_eq!(calendar::days_in_month(n, 2020).or_sentinel(), -1, "days_in_month({n})");
    }
}

#[test]
fn negative_numbers_give_the_boolean_sentinel() {
    let mut rng: ThreadRng = rand::rng();
    for n in negative_ints(&mut rng) {
        assert!(!calendar::is_leap_year(n).or_sentinel(), "is_leap_year({n})");
        assert!(!divisors::is_perfect_number(n).or_sentinel(), "is_perfect_number({n})");
        assert!(!digits::has_shared_digit(n, 12).or_sentinel(), "has_shared_digit({n})");
        assert!(!divisors::is_odd(n), "is_odd({n})");
    }
}

#[test]
fn negative_measures_give_the_float_sentinel() {
    let mut rng: ThreadRng = rand::rng();
    for x in negative_floats(&mut rng) {
        assert_eq!(geometry::area_circle(x).or_sentinel(), -1.0, "area_circle({x})");
        assert_eq!(geometry::area_rectangle(x, 1.0).or_sentinel(), -1.0);
        assert_eq!(geometry::area_rectangle(1.0, x).or_sentinel(), -1.0);
        assert_eq!(units::pounds_to_kg(x).or_sentinel(), -1.0, "pounds_to_kg({x})");
        assert_eq!(units::inches_to_cm(x).or_sentinel(), -1.0, "inches_to_cm({x})");
    }
}

#[test]
fn rejections_name_the_offending_parameter() {
    let mut rng: ThreadRng = rand::rng();
    for n in negative_ints(&mut rng) {
        let minutes: i64 = i64::from(n);
        assert!(matches!(
            time::years_and_days(minutes),
            Err(InputError::Negative { name: "minutes", .. })
        ));
        assert_eq!(
            units::storage_size(n).unwrap_err().parameter(),
            Some("kilobytes")
        );
    }
}

/*************************************************************
                 Properties of valid input
**************************************************************/

#[test]
fn exercises_are_pure() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let n: i32 = rng.random_range(-100_000..100_000);
        assert_eq!(digits::sum_digits(n), digits::sum_digits(n));
        assert_eq!(digits::is_palindrome(n), digits::is_palindrome(n));
        assert_eq!(divisors::factors(n), divisors::factors(n));

        let x: f64 = rng.random_range(-1000.0..1000.0);
        assert_eq!(geometry::area_circle(x), geometry::area_circle(x));
    }
}

#[test]
fn palindromes_match_their_decimal_text() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let n: i32 = rng.random_range(0..1_000_000);
        let text: String = n.to_string();
        let reversed: String = text.chars().rev().collect();
        assert_eq!(digits::is_palindrome(n), text == reversed, "is_palindrome({n})");
    }
}

#[test]
fn gcd_divides_both_operands() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let first: i32 = rng.random_range(10..100_000);
        let second: i32 = rng.random_range(10..100_000);
        let gcd: i32 = divisors::greatest_common_divisor(first, second).unwrap();
        assert_eq!(first % gcd, 0);
        assert_eq!(second % gcd, 0);
        assert_eq!(
            divisors::greatest_common_divisor(first / gcd, second / gcd).unwrap_or(1),
            1,
            "{first} / {gcd} and {second} / {gcd} should be coprime"
        );
    }
}

#[test]
fn factors_are_ascending_divisors() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let n: i32 = rng.random_range(1..10_000);
        let factors: Vec<i32> = divisors::factors(n).unwrap();
        assert_eq!(factors.first(), Some(&1));
        assert_eq!(factors.last(), Some(&n));
        assert!(factors.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(factors.iter().all(|factor| n % factor == 0));
    }
}

#[test]
fn sum_odd_matches_a_plain_loop() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let start: i32 = rng.random_range(1..2_000);
        let end: i32 = rng.random_range(start..4_000);
        let expected: i64 = (start..=end)
            .filter(|n| n % 2 != 0)
            .map(i64::from)
            .sum();
        assert_eq!(divisors::sum_odd(start, end), Ok(expected), "sum_odd({start}, {end})");
    }
}

#[test]
fn days_in_month_stays_within_a_month() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let month: i32 = rng.random_range(1..=12);
        let year: i32 = rng.random_range(calendar::YEAR_RANGE);
        let days: i32 = calendar::days_in_month(month, year).unwrap();
        assert!((28..=31).contains(&days), "{month}/{year} has {days} days");
        if month == 2 {
            let leap: bool = calendar::is_leap_year(year).unwrap();
            assert_eq!(days, if leap { 29 } else { 28 });
        }
    }
}

#[test]
fn split_quantities_add_back_up() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..SAMPLES {
        let kilobytes: i32 = rng.random_range(0..i32::MAX);
        let size: units::StorageSize = units::storage_size(kilobytes).unwrap();
        assert_eq!(size.megabytes * 1024 + size.remaining_kilobytes, kilobytes);

        let minutes: i64 = rng.random_range(0..1_000_000_000);
        let span: time::YearsAndDays = time::years_and_days(minutes).unwrap();
        assert_eq!((span.years * 365 + span.days) * 24 * 60, minutes - minutes % (24 * 60));
    }
}
