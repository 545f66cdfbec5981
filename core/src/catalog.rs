//! # Exercise Catalogue
//!
//! Names every exercise, describes its parameters, and evaluates it from textual
//! arguments. This is what the command line front-end dispatches through.
//!
//! ```
//! use primer_core::catalog::{self, Exercise};
//!
//! let exercise: Exercise = "days-in-month".parse().unwrap();
//! let args: Vec<String> = vec!["2".to_string(), "2020".to_string()];
//! assert_eq!(catalog::evaluate(exercise, &args).unwrap(), "29");
//! ```

use std::fmt;
use std::str::FromStr;

use primer_common::InputError;
use primer_common::utils::number::format_decimal;
use thiserror::Error;
use tracing::trace;

use crate::scoring::{PlayerScore, Round};
use crate::{calendar, compare, digits, divisors, geometry, scoring, switches, time, units};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown exercise '{0}', run `primer list` to see them all")]
    UnknownExercise(String),

    #[error("{exercise} takes {expected} argument(s), got {got}")]
    WrongArity {
        exercise: Exercise,
        expected: String,
        got: usize,
    },

    #[error("'{value}' is not a valid {parameter}, expected {expected}")]
    BadArgument {
        parameter: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Invalid(#[from] InputError),
}

/// Static description of an exercise.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub params: &'static [&'static str],
    /// How many leading parameters are mandatory.
    pub required: usize,
    pub summary: &'static str,
    /// What the exercise classically answered on invalid input, if anything.
    pub sentinel: Option<&'static str>,
}

const fn entry(
    name: &'static str,
    params: &'static [&'static str],
    summary: &'static str,
    sentinel: Option<&'static str>,
) -> Entry {
    Entry {
        name,
        params,
        required: params.len(),
        summary,
        sentinel,
    }
}

const INT: Option<&str> = Some("-1");
const FLOAT: Option<&str> = Some("-1.0");
const BOOL: Option<&str> = Some("false");
const MESSAGE: Option<&str> = Some(primer_common::sentinel::INVALID_VALUE_MESSAGE);
const PRINTOUT: Option<&str> = Some(primer_common::sentinel::INVALID_VALUE_PRINTOUT);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    AreaCircle,
    AreaRectangle,
    BarkingDog,
    DecimalComparator,
    EqualSum,
    IntEquality,
    IsTeen,
    HasTeen,
    PlayingCat,
    EvenDigitSum,
    FirstLastDigitSum,
    SumDigits,
    Palindrome,
    LastDigitRange,
    SameLastDigit,
    SharedDigit,
    LeapYear,
    DaysInMonth,
    DayOfWeek,
    Factors,
    Gcd,
    PerfectNumber,
    IsPrime,
    Primes,
    IsOdd,
    SumOdd,
    EvenNumbers,
    FizzbuzzSum,
    FinalScore,
    HighScorePosition,
    PlayerPoints,
    Duration,
    DurationSeconds,
    YearsAndDays,
    Megabytes,
    FeetToCm,
    InchesToCm,
    PoundsToKg,
    Interest,
    SwitchValue,
    SwitchLetter,
    MonthLabel,
}

impl Exercise {
    pub const ALL: [Exercise; 42] = [
        Self::AreaCircle,
        Self::AreaRectangle,
        Self::BarkingDog,
        Self::DecimalComparator,
        Self::EqualSum,
        Self::IntEquality,
        Self::IsTeen,
        Self::HasTeen,
        Self::PlayingCat,
        Self::EvenDigitSum,
        Self::FirstLastDigitSum,
        Self::SumDigits,
        Self::Palindrome,
        Self::LastDigitRange,
        Self::SameLastDigit,
        Self::SharedDigit,
        Self::LeapYear,
        Self::DaysInMonth,
        Self::DayOfWeek,
        Self::Factors,
        Self::Gcd,
        Self::PerfectNumber,
        Self::IsPrime,
        Self::Primes,
        Self::IsOdd,
        Self::SumOdd,
        Self::EvenNumbers,
        Self::FizzbuzzSum,
        Self::FinalScore,
        Self::HighScorePosition,
        Self::PlayerPoints,
        Self::Duration,
        Self::DurationSeconds,
        Self::YearsAndDays,
        Self::Megabytes,
        Self::FeetToCm,
        Self::InchesToCm,
        Self::PoundsToKg,
        Self::Interest,
        Self::SwitchValue,
        Self::SwitchLetter,
        Self::MonthLabel,
    ];

    pub fn entry(self) -> Entry {
        match self {
            Self::AreaCircle => entry("area-circle", &["radius"], "Area of a circle", FLOAT),
            Self::AreaRectangle => entry("area-rectangle", &["x", "y"], "Area of a rectangle", FLOAT),
            Self::BarkingDog => entry(
                "barking-dog",
                &["barking", "hour"],
                "Whether a barking dog wakes its owner at the given hour",
                BOOL,
            ),
            Self::DecimalComparator => entry(
                "decimal-comparator",
                &["first", "second"],
                "Whether two numbers match to three decimal places",
                None,
            ),
            Self::EqualSum => entry("equal-sum", &["a", "b", "c"], "Whether a + b equals c", None),
            Self::IntEquality => entry(
                "int-equality",
                &["a", "b", "c"],
                "Whether three numbers are all equal, all different or neither",
                PRINTOUT,
            ),
            Self::IsTeen => entry("is-teen", &["number"], "Whether a number is within 13-19", None),
            Self::HasTeen => entry(
                "has-teen",
                &["a", "b", "c"],
                "Whether any of three numbers is within 13-19",
                None,
            ),
            Self::PlayingCat => entry(
                "playing-cat",
                &["summer", "temperature"],
                "Whether the cat plays at the given temperature",
                None,
            ),
            Self::EvenDigitSum => entry(
                "even-digit-sum",
                &["number"],
                "Sum of the even digits of a number",
                INT,
            ),
            Self::FirstLastDigitSum => entry(
                "first-last-digit-sum",
                &["number"],
                "Sum of the first and the last digit",
                INT,
            ),
            Self::SumDigits => entry("sum-digits", &["number"], "Sum of all digits", INT),
            Self::Palindrome => entry(
                "palindrome",
                &["number"],
                "Whether a number reads the same backwards",
                None,
            ),
            Self::LastDigitRange => entry(
                "last-digit-range",
                &["number"],
                "Whether a number is within 10-1000",
                None,
            ),
            Self::SameLastDigit => entry(
                "same-last-digit",
                &["first", "second", "third"],
                "Whether two of three numbers share their last digit",
                BOOL,
            ),
            Self::SharedDigit => entry(
                "shared-digit",
                &["first", "second"],
                "Whether two two-digit numbers share a digit",
                BOOL,
            ),
            Self::LeapYear => entry("leap-year", &["year"], "Whether a year is a leap year", BOOL),
            Self::DaysInMonth => entry(
                "days-in-month",
                &["month", "year"],
                "Number of days in a month",
                INT,
            ),
            Self::DayOfWeek => entry("day-of-week", &["day"], "Weekday name, 0 is Sunday", None),
            Self::Factors => entry("factors", &["number"], "All divisors of a number", PRINTOUT),
            Self::Gcd => entry(
                "gcd",
                &["first", "second"],
                "Greatest common divisor of two numbers",
                INT,
            ),
            Self::PerfectNumber => entry(
                "perfect-number",
                &["number"],
                "Whether a number equals the sum of its proper divisors",
                BOOL,
            ),
            Self::IsPrime => entry("is-prime", &["number"], "Whether a number is prime", None),
            Self::Primes => entry(
                "primes",
                &["start", "end", "limit"],
                "The first primes in a half-open range",
                None,
            ),
            Self::IsOdd => entry("is-odd", &["number"], "Whether a number is odd and positive", None),
            Self::SumOdd => entry(
                "sum-odd",
                &["start", "end"],
                "Sum of the odd numbers in an inclusive range",
                INT,
            ),
            Self::EvenNumbers => entry(
                "even-numbers",
                &["start", "finish"],
                "The even numbers in an inclusive range",
                None,
            ),
            Self::FizzbuzzSum => entry(
                "fizzbuzz-sum",
                &["count"],
                "Sum of the first multiples of both 3 and 5",
                None,
            ),
            Self::FinalScore => entry(
                "final-score",
                &["game_over", "score", "levels_completed", "bonus"],
                "Final score of a game",
                INT,
            ),
            Self::HighScorePosition => entry(
                "high-score-position",
                &["score"],
                "Position on the high score table",
                None,
            ),
            Self::PlayerPoints => Entry {
                required: 0,
                ..entry(
                    "player-points",
                    &["name", "score"],
                    "Points for a player entry, name and score optional",
                    None,
                )
            },
            Self::Duration => entry(
                "duration",
                &["minutes", "seconds"],
                "Minutes and seconds as a padded duration",
                MESSAGE,
            ),
            Self::DurationSeconds => entry(
                "duration-seconds",
                &["seconds"],
                "Seconds as a duration",
                MESSAGE,
            ),
            Self::YearsAndDays => entry(
                "years-and-days",
                &["minutes"],
                "Minutes as years and days",
                PRINTOUT,
            ),
            Self::Megabytes => entry(
                "megabytes",
                &["kilobytes"],
                "Kilobytes as megabytes and kilobytes",
                PRINTOUT,
            ),
            Self::FeetToCm => entry(
                "feet-to-cm",
                &["feet", "inches"],
                "Feet and inches in centimeters",
                FLOAT,
            ),
            Self::InchesToCm => entry("inches-to-cm", &["inches"], "Inches in centimeters", FLOAT),
            Self::PoundsToKg => entry("pounds-to-kg", &["pounds"], "Pounds in kilograms", FLOAT),
            Self::Interest => entry(
                "interest",
                &["amount", "rate"],
                "Simple interest at a percentage rate",
                None,
            ),
            Self::SwitchValue => entry("switch-value", &["value"], "Branch on an integer", None),
            Self::SwitchLetter => entry("switch-letter", &["letter"], "Branch on a character", None),
            Self::MonthLabel => entry("month-label", &["month"], "Branch on a month name", None),
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|exercise| exercise.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownExercise(s.to_string()))
    }
}

/// Positional arguments of one evaluation.
struct Args<'a> {
    entry: Entry,
    values: &'a [String],
}

impl<'a> Args<'a> {
    fn new(exercise: Exercise, values: &'a [String]) -> Result<Self, CatalogError> {
        let entry: Entry = exercise.entry();
        let max: usize = entry.params.len();

        if values.len() < entry.required || values.len() > max {
            let expected: String = if entry.required == max {
                max.to_string()
            } else {
                format!("{} to {}", entry.required, max)
            };
            return Err(CatalogError::WrongArity {
                exercise,
                expected,
                got: values.len(),
            });
        }
        Ok(Self { entry, values })
    }

    fn get<T: Argument>(&self, index: usize) -> Result<T, CatalogError> {
        self.get_as(index, self.entry.params[index])
    }

    /// Parses the argument at `index`, blaming `parameter` when it does not parse.
    fn get_as<T: Argument>(
        &self,
        index: usize,
        parameter: &'static str,
    ) -> Result<T, CatalogError> {
        let value: &str = self.values[index].trim();
        value.parse::<T>().map_err(|_| CatalogError::BadArgument {
            parameter,
            value: value.to_string(),
            expected: T::EXPECTED,
        })
    }
}

/// A parameter type that can be read from a textual argument.
trait Argument: FromStr {
    /// Describes the accepted input in parse errors.
    const EXPECTED: &'static str;
}

macro_rules! argument {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl Argument for $ty {
                const EXPECTED: &'static str = $expected;
            }
        )*
    };
}

argument! {
    bool => "true or false",
    char => "a single character",
    f64 => "a number",
    i32 => "a whole number",
    i64 => "a whole number",
    usize => "a non-negative whole number",
    String => "text",
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Evaluates `exercise` on textual arguments and renders the result.
///
/// Invalid input surfaces as [`CatalogError::Invalid`]; the caller decides whether to show
/// the error or the exercise's sentinel.
pub fn evaluate(exercise: Exercise, values: &[String]) -> Result<String, CatalogError> {
    let args: Args = Args::new(exercise, values)?;
    trace!(%exercise, ?values, "evaluating exercise");

    let rendered: String = match exercise {
        Exercise::AreaCircle => format_decimal(geometry::area_circle(args.get(0)?)?),
        Exercise::AreaRectangle => {
            format_decimal(geometry::area_rectangle(args.get(0)?, args.get(1)?)?)
        }
        Exercise::BarkingDog => compare::should_wake_up(args.get(0)?, args.get(1)?)?.to_string(),
        Exercise::DecimalComparator => {
            compare::are_equal_by_three_decimal_places(args.get(0)?, args.get(1)?).to_string()
        }
        Exercise::EqualSum => {
            compare::has_equal_sum(args.get(0)?, args.get(1)?, args.get(2)?).to_string()
        }
        Exercise::IntEquality => {
            compare::classify_three(args.get(0)?, args.get(1)?, args.get(2)?)?.to_string()
        }
        Exercise::IsTeen => compare::is_teen(args.get(0)?).to_string(),
        Exercise::HasTeen => compare::has_teen(args.get(0)?, args.get(1)?, args.get(2)?).to_string(),
        Exercise::PlayingCat => compare::is_cat_playing(args.get(0)?, args.get(1)?).to_string(),
        Exercise::EvenDigitSum => digits::even_digit_sum(args.get(0)?)?.to_string(),
        Exercise::FirstLastDigitSum => digits::sum_first_and_last_digit(args.get(0)?)?.to_string(),
        Exercise::SumDigits => digits::sum_digits(args.get(0)?)?.to_string(),
        Exercise::Palindrome => digits::is_palindrome(args.get(0)?).to_string(),
        Exercise::LastDigitRange => digits::in_last_digit_range(args.get(0)?).to_string(),
        Exercise::SameLastDigit => {
            digits::has_same_last_digit(args.get(0)?, args.get(1)?, args.get(2)?)?.to_string()
        }
        Exercise::SharedDigit => digits::has_shared_digit(args.get(0)?, args.get(1)?)?.to_string(),
        Exercise::LeapYear => calendar::is_leap_year(args.get(0)?)?.to_string(),
        Exercise::DaysInMonth => calendar::days_in_month(args.get(0)?, args.get(1)?)?.to_string(),
        Exercise::DayOfWeek => calendar::day_of_week(args.get(0)?)?.to_string(),
        Exercise::Factors => join(&divisors::factors(args.get(0)?)?),
        Exercise::Gcd => divisors::greatest_common_divisor(args.get(0)?, args.get(1)?)?.to_string(),
        Exercise::PerfectNumber => divisors::is_perfect_number(args.get(0)?)?.to_string(),
        Exercise::IsPrime => divisors::is_prime(args.get(0)?).to_string(),
        Exercise::Primes => join(&divisors::primes_between(
            args.get(0)?,
            args.get(1)?,
            args.get(2)?,
        )?),
        Exercise::IsOdd => divisors::is_odd(args.get(0)?).to_string(),
        Exercise::SumOdd => divisors::sum_odd(args.get(0)?, args.get(1)?)?.to_string(),
        Exercise::EvenNumbers => {
            join(&divisors::even_numbers_between(args.get(0)?, args.get(1)?)?)
        }
        Exercise::FizzbuzzSum => divisors::sum_of_fizzbuzz_multiples(args.get(0)?).to_string(),
        Exercise::FinalScore => {
            let round: Round = Round::new(args.get(0)?, args.get(1)?, args.get(2)?, args.get(3)?);
            scoring::calculate_score(&round)?.to_string()
        }
        Exercise::HighScorePosition => scoring::high_score_position(args.get(0)?).to_string(),
        Exercise::PlayerPoints => {
            let entry: PlayerScore = match values.len() {
                0 => PlayerScore::default(),
                1 => PlayerScore::anonymous(args.get_as(0, "score")?),
                _ => PlayerScore::named(args.get::<String>(0)?, args.get(1)?),
            };
            scoring::player_points(&entry).to_string()
        }
        Exercise::Duration => time::duration_string(args.get(0)?, args.get(1)?)?,
        Exercise::DurationSeconds => time::duration_from_seconds(args.get(0)?)?,
        Exercise::YearsAndDays => time::years_and_days(args.get(0)?)?.to_string(),
        Exercise::Megabytes => units::storage_size(args.get(0)?)?.to_string(),
        Exercise::FeetToCm => {
            format_decimal(units::feet_and_inches_to_cm(args.get(0)?, args.get(1)?)?)
        }
        Exercise::InchesToCm => format_decimal(units::inches_to_cm(args.get(0)?)?),
        Exercise::PoundsToKg => format_decimal(units::pounds_to_kg(args.get(0)?)?),
        Exercise::Interest => {
            format_decimal(units::calculate_interest(args.get(0)?, args.get(1)?))
        }
        Exercise::SwitchValue => switches::describe_value(args.get(0)?).join("\n"),
        Exercise::SwitchLetter => switches::describe_letter(args.get(0)?),
        Exercise::MonthLabel => switches::month_label(&args.get::<String>(0)?).to_string(),
    };

    Ok(rendered)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
