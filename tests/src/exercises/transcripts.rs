#![cfg(test)]
use primer_core::catalog::Exercise;
use primer_core::tour::transcript;

fn assert_transcript(exercise: Exercise, expected: &[&str]) {
    let actual: Vec<String> = transcript(exercise);
    assert_eq!(actual, expected, "transcript of {exercise} differs");
}

/*************************************************************
                    Numbers and predicates
**************************************************************/

#[test]
fn area_circle() {
    assert_transcript(
        Exercise::AreaCircle,
        &["78.53981633974483", "-1.0", "254.46900494077323"],
    );
}

#[test]
fn barking_dog() {
    assert_transcript(
        Exercise::BarkingDog,
        &["true", "false", "false", "true", "false"],
    );
}

#[test]
fn comparisons() {
    assert_transcript(
        Exercise::DecimalComparator,
        &["false", "false", "false", "true"],
    );
    assert_transcript(
        Exercise::EqualSum,
        &["false", "true", "true", "false", "false"],
    );
    assert_transcript(Exercise::PlayingCat, &["false", "false", "true", "true"]);
}

#[test]
fn int_equality() {
    assert_transcript(
        Exercise::IntEquality,
        &[
            "All numbers are equal",
            "Neither all are equal or different",
            "Invalid Value",
            "All numbers are different",
        ],
    );
}

#[test]
fn digit_sums() {
    assert_transcript(Exercise::EvenDigitSum, &["10", "14", "10", "0", "-1"]);
    assert_transcript(Exercise::FirstLastDigitSum, &["4", "9", "0", "-1", "10"]);
    assert_transcript(
        Exercise::SumDigits,
        &["125:8", "-125:-1", "125555:23", "16625:20", "1229295:30"],
    );
}

#[test]
fn digit_predicates() {
    assert_transcript(Exercise::Palindrome, &["false", "true", "true", "true", "false"]);
    assert_transcript(Exercise::SameLastDigit, &["true", "true", "false", "false"]);
    assert_transcript(
        Exercise::SharedDigit,
        &["true", "false", "true", "false", "true"],
    );
}

#[test]
fn calendar() {
    assert_transcript(Exercise::LeapYear, &["false", "true", "false", "true"]);
    assert_transcript(Exercise::DaysInMonth, &["31", "29", "28", "-1"]);
}

#[test]
fn divisors() {
    assert_transcript(
        Exercise::Factors,
        &["1 2 3 6", "1 2 4 8 16 32", "1 2 5 10", "Invalid Value"],
    );
    assert_transcript(Exercise::PerfectNumber, &["true", "true", "false", "false"]);
    assert_transcript(Exercise::IsOdd, &["true"]);
    assert_transcript(Exercise::SumOdd, &["38105893"]);
    assert_transcript(Exercise::FizzbuzzSum, &[" calcSum = 225"]);
}

#[test]
fn even_numbers() {
    assert_transcript(
        Exercise::EvenNumbers,
        &[
            "number: 6",
            "number: 8",
            "number: 10",
            "number: 12",
            "number: 14",
            "number: 16",
            "number: 18",
            "number: 20",
            "evenNumberFound: 8",
        ],
    );
}

/*************************************************************
                     Scores, text and units
**************************************************************/

#[test]
fn scores() {
    assert_transcript(
        Exercise::FinalScore,
        &["Your final score was 3300", "Your final score was 3300"],
    );
    assert_transcript(
        Exercise::HighScorePosition,
        &[
            "Hi Tim managed to get into position 1 on the high score table.",
            "Hi Bob managed to get into position 4 on the high score table.",
            "Hi Rob managed to get into position 3 on the high score table.",
            "Hi Dan managed to get into position 2 on the high score table.",
        ],
    );
    assert_transcript(
        Exercise::PlayerPoints,
        &[
            "Player:Tim   score:500 point",
            "New score is: 500000",
            "Unnamed player scored:75 point",
            "No player name, no player score",
        ],
    );
}

#[test]
fn durations() {
    assert_transcript(
        Exercise::Duration,
        &["01h 05m 45s ", "00h 33m 08s "],
    );
    assert_transcript(Exercise::DurationSeconds, &["1h 16m 7s ", "Invalid value"]);
    assert_transcript(
        Exercise::YearsAndDays,
        &[
            "525600 min = 1 y and 0 d",
            "1051200 min = 2 y and 0 d",
            "106767 min = 0 y and 74 d",
            "561622 min = 1 y and 25 d",
        ],
    );
}

#[test]
fn conversions() {
    assert_transcript(
        Exercise::FeetToCm,
        &["6.0 feet, 0.0 inches = 182.88 cm"],
    );
    assert_transcript(
        Exercise::InchesToCm,
        &["13.0 feet, 1.0 inches = 398.78000000000003 cm"],
    );
    assert_transcript(Exercise::PoundsToKg, &["Kg = 90.718474"]);
}

#[test]
fn switches() {
    assert_transcript(Exercise::SwitchValue, &["Value was 2"]);
    assert_transcript(Exercise::SwitchLetter, &["A was found"]);
    assert_transcript(Exercise::MonthLabel, &["June"]);
}

#[test]
fn interest() {
    let mut expected: Vec<String> = vec![
        "10000 at 2% interest = 200.0".to_string(),
        "10000 at 3% interest = 300.0".to_string(),
        "10000 at 4% interest = 400.0".to_string(),
        "10000 at 5% interest = 500.0".to_string(),
    ];
    let ascending: Vec<String> = (2..=8)
        .map(|rate| format!("10000 at {rate}% interest = {}.000000", rate * 100))
        .collect();
    expected.extend(ascending.iter().cloned());
    expected.push("*".repeat(45));
    expected.extend(ascending.into_iter().rev());

    assert_eq!(transcript(Exercise::Interest), expected);
}
