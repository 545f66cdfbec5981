//! Example sessions for every exercise.
//!
//! A transcript is the list of lines printed when the exercise is driven with a fixed
//! set of inputs. Rejected inputs show up the classic way, as `-1`, `false` or an
//! "Invalid Value" line.

use std::fmt::Display;

use primer_common::Result;
use primer_common::Sentinel;
use primer_common::sentinel::INVALID_VALUE_PRINTOUT;
use primer_common::utils::number::format_decimal;
use tracing::trace;

use crate::catalog::Exercise;
use crate::scoring::{PlayerScore, Round};
use crate::{calendar, compare, digits, divisors, geometry, scoring, switches, time, units};

/// Renders a result that is printed directly, or the invalid value line.
fn printout<T: Display>(result: Result<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(_) => INVALID_VALUE_PRINTOUT.to_string(),
    }
}

fn lines<T: ToString>(values: impl IntoIterator<Item = T>) -> Vec<String> {
    values.into_iter().map(|value| value.to_string()).collect()
}

/// `6.0 feet, 0.0 inches = 182.88 cm`
fn length_line(feet: f64, inches: f64) -> String {
    let centimeters: f64 = units::feet_and_inches_to_cm(feet, inches).or_sentinel();
    format!(
        "{} feet, {} inches = {} cm",
        format_decimal(feet),
        format_decimal(inches),
        format_decimal(centimeters)
    )
}

/// `10000 at 2% interest = 200.000000`
fn interest_line(rate: i32) -> String {
    let interest: f64 = units::calculate_interest(10000.0, f64::from(rate));
    format!("10000 at {rate}% interest = {interest:.6}")
}

pub fn transcript(exercise: Exercise) -> Vec<String> {
    trace!(%exercise, "replaying transcript");

    match exercise {
        Exercise::AreaCircle => lines(
            [5.0, -1.0, 9.0]
                .map(|radius| format_decimal(geometry::area_circle(radius).or_sentinel())),
        ),
        Exercise::AreaRectangle => lines(
            [(5.0, 4.0), (-1.0, 4.0)]
                .map(|(x, y)| format_decimal(geometry::area_rectangle(x, y).or_sentinel())),
        ),
        Exercise::BarkingDog => lines(
            [(true, 1), (false, 2), (true, 8), (true, 23), (true, -1)]
                .map(|(barking, hour)| compare::should_wake_up(barking, hour).or_sentinel()),
        ),
        Exercise::DecimalComparator => lines(
            [(111.0, 711.0), (2345.0, 767676.0), (-2345.0, 2345.0), (2345.0, 2345.0)]
                .map(|(a, b)| compare::are_equal_by_three_decimal_places(a, b)),
        ),
        Exercise::EqualSum => lines(
            [(-1, -1, -1), (1, 1, 2), (1, -1, 0), (-3, -4, -5), (-4, -4, -4)]
                .map(|(a, b, c)| compare::has_equal_sum(a, b, c)),
        ),
        Exercise::IntEquality => lines(
            [(1, 1, 1), (1, 1, 2), (-1, -1, -1), (1, 2, 3)]
                .map(|(a, b, c)| printout(compare::classify_three(a, b, c))),
        ),
        Exercise::IsTeen => lines([9, 13].map(compare::is_teen)),
        Exercise::HasTeen => lines(
            [(9, 99, 19), (23, 15, 42), (22, 23, 34)]
                .map(|(a, b, c)| compare::has_teen(a, b, c)),
        ),
        Exercise::PlayingCat => lines(
            [(true, 10), (false, 36), (false, 35), (true, 25)]
                .map(|(summer, temperature)| compare::is_cat_playing(summer, temperature)),
        ),
        Exercise::EvenDigitSum => lines(
            [4567, 44567, 45367, 5, -45267].map(|n| digits::even_digit_sum(n).or_sentinel()),
        ),
        Exercise::FirstLastDigitSum => lines(
            [252, 257, 0, -16, 5].map(|n| digits::sum_first_and_last_digit(n).or_sentinel()),
        ),
        Exercise::SumDigits => [125, -125, 125555, 16625, 1229295]
            .map(|n| format!("{n}:{}", digits::sum_digits(n).or_sentinel()))
            .to_vec(),
        Exercise::Palindrome => lines(
            [1123454321, 123404321, 12344321, -123454321, 12341].map(digits::is_palindrome),
        ),
        Exercise::LastDigitRange => lines([10, 148, 468, 1051].map(digits::in_last_digit_range)),
        Exercise::SameLastDigit => lines(
            [(41, 22, 71), (23, 32, 42), (9, 99, 999), (12, 34, 1051)]
                .map(|(a, b, c)| digits::has_same_last_digit(a, b, c).or_sentinel()),
        ),
        Exercise::SharedDigit => lines(
            [(12, 23), (10, 100), (15, 55), (15, -55), (15, 35)]
                .map(|(a, b)| digits::has_shared_digit(a, b).or_sentinel()),
        ),
        Exercise::LeapYear => lines(
            [-1600, 1600, 2017, 2000].map(|year| calendar::is_leap_year(year).or_sentinel()),
        ),
        Exercise::DaysInMonth => lines(
            [(1, 2020), (2, 2020), (2, 2018), (-1, 2020)]
                .map(|(month, year)| calendar::days_in_month(month, year).or_sentinel()),
        ),
        // Out of range days print nothing.
        Exercise::DayOfWeek => (-1..=6)
            .filter_map(|day| calendar::day_of_week(day).ok())
            .map(str::to_string)
            .collect(),
        Exercise::Factors => [6, 32, 10, -1]
            .map(|n| match divisors::factors(n) {
                Ok(factors) => lines(factors).join(" "),
                Err(_) => INVALID_VALUE_PRINTOUT.to_string(),
            })
            .to_vec(),
        Exercise::Gcd => lines(
            [(25, 15), (12, 30), (9, 18), (81, 153)]
                .map(|(a, b)| divisors::greatest_common_divisor(a, b).or_sentinel()),
        ),
        Exercise::PerfectNumber => lines(
            [6, 28, 5, -1].map(|n| divisors::is_perfect_number(n).or_sentinel()),
        ),
        Exercise::IsPrime => lines([1, 2, 17, 25].map(divisors::is_prime)),
        Exercise::Primes => {
            let primes: Vec<i32> = divisors::primes_between(10, 50, 6).unwrap_or_default();
            let mut lines: Vec<String> = primes
                .iter()
                .enumerate()
                .map(|(index, prime)| format!("Count number {prime} count: {}", index + 1))
                .collect();
            lines.push("Exiting from a loop".to_string());
            lines
        }
        Exercise::IsOdd => lines([divisors::is_odd(123)]),
        Exercise::SumOdd => lines([divisors::sum_odd(13, 12345).or_sentinel()]),
        Exercise::EvenNumbers => {
            let evens: Vec<i32> = divisors::even_numbers_between(5, 21).unwrap_or_default();
            let mut lines: Vec<String> = evens.iter().map(|n| format!("number: {n}")).collect();
            lines.push(format!("evenNumberFound: {}", evens.len()));
            lines
        }
        Exercise::FizzbuzzSum => {
            vec![format!(" calcSum = {}", divisors::sum_of_fizzbuzz_multiples(5))]
        }
        // Printed once by the calculation and once more by the caller.
        Exercise::FinalScore => {
            let round: Round = Round::new(true, 800, 5, 100);
            let score: i64 = scoring::calculate_score(&round).or_sentinel();
            vec![format!("Your final score was {score}"); 2]
        }
        Exercise::HighScorePosition => {
            [("Hi Tim", 1500), ("Hi Bob", 90), ("Hi Rob", 450), ("Hi Dan", 900)]
                .map(|(name, score)| {
                    scoring::high_score_message(name, scoring::high_score_position(score))
                })
                .to_vec()
        }
        Exercise::PlayerPoints => {
            let named: PlayerScore = PlayerScore::named("Tim", 500);
            vec![
                named.summary(),
                format!("New score is: {}", scoring::player_points(&named)),
                PlayerScore::anonymous(75).summary(),
                PlayerScore::default().summary(),
            ]
        }
        Exercise::Duration => lines(
            [(65, 45), (33, 8)]
                .map(|(minutes, seconds)| time::duration_string(minutes, seconds).or_sentinel()),
        ),
        Exercise::DurationSeconds => lines(
            [4567, -20].map(|seconds| time::duration_from_seconds(seconds).or_sentinel()),
        ),
        Exercise::YearsAndDays => lines(
            [525600, 1051200, 106767, 561622]
                .map(|minutes| printout(time::years_and_days(minutes))),
        ),
        Exercise::Megabytes => lines(
            [2500, -1024, 5000].map(|kilobytes| printout(units::storage_size(kilobytes))),
        ),
        Exercise::FeetToCm => vec![length_line(6.0, 0.0)],
        Exercise::InchesToCm => vec![match units::feet_and_inches(157.0) {
            Ok((feet, inches)) => length_line(feet, inches),
            Err(_) => INVALID_VALUE_PRINTOUT.to_string(),
        }],
        Exercise::PoundsToKg => vec![format!(
            "Kg = {}",
            format_decimal(units::pounds_to_kg(200.0).or_sentinel())
        )],
        Exercise::Interest => {
            let mut lines: Vec<String> = (2..=5)
                .map(|rate| {
                    let interest: f64 = units::calculate_interest(10000.0, f64::from(rate));
                    format!("10000 at {rate}% interest = {}", format_decimal(interest))
                })
                .collect();
            lines.extend((2..=8).map(interest_line));
            lines.push("*".repeat(45));
            lines.extend((2..=8).rev().map(interest_line));
            lines
        }
        Exercise::SwitchValue => switches::describe_value(2),
        Exercise::SwitchLetter => lines(['A'].map(switches::describe_letter)),
        Exercise::MonthLabel => lines(["june"].map(switches::month_label)),
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
