#![cfg(test)]
use primer_common::sentinel::INVALID_VALUE_PRINTOUT;
use primer_common::{InputError, Sentinel};
use primer_core::catalog::{self, CatalogError, Exercise};
use primer_core::{digits, divisors, time};
use rand::Rng;
use rand::rngs::ThreadRng;

fn evaluate(name: &str, args: &[String]) -> Result<String, CatalogError> {
    let exercise: Exercise = name.parse()?;
    catalog::evaluate(exercise, args)
}

#[test]
fn textual_evaluation_agrees_with_direct_calls() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..100 {
        let n: i32 = rng.random_range(-10_000..10_000);
        let args: Vec<String> = vec![n.to_string()];

        assert_eq!(
            evaluate("palindrome", &args).unwrap(),
            digits::is_palindrome(n).to_string()
        );
        assert_eq!(
            evaluate("is-prime", &args).unwrap(),
            divisors::is_prime(n).to_string()
        );
        match digits::sum_digits(n) {
            Ok(sum) => assert_eq!(evaluate("sum-digits", &args), Ok(sum.to_string())),
            Err(err) => assert_eq!(
                evaluate("sum-digits", &args),
                Err(CatalogError::Invalid(err))
            ),
        }
    }
}

#[test]
fn sentinels_match_the_collapsed_results() {
    let rejected: Vec<String> = vec!["-5".to_string()];

    assert!(divisors::factors(-5).is_err());
    assert_eq!(Exercise::Factors.entry().sentinel, Some(INVALID_VALUE_PRINTOUT));

    assert_eq!(
        Exercise::SumDigits.entry().sentinel,
        Some(digits::sum_digits(-5).or_sentinel().to_string().as_str())
    );
    assert_eq!(
        Exercise::DurationSeconds.entry().sentinel,
        Some(time::duration_from_seconds(-5).or_sentinel().as_str())
    );
    assert!(matches!(
        evaluate("duration-seconds", &rejected),
        Err(CatalogError::Invalid(InputError::Negative { name: "seconds", .. }))
    ));
}

#[test]
fn every_exercise_reports_arity() {
    let too_many: Vec<String> = vec!["1".to_string(); 5];
    for exercise in Exercise::ALL {
        assert!(
            matches!(
                catalog::evaluate(exercise, &too_many),
                Err(CatalogError::WrongArity { got: 5, .. })
            ),
            "{exercise} accepted five arguments"
        );
    }
}

#[test]
fn unknown_exercises_are_reported_by_name() {
    let err: CatalogError = evaluate("fibonacci", &[]).unwrap_err();
    assert_eq!(err, CatalogError::UnknownExercise("fibonacci".to_string()));
    assert!(err.to_string().contains("fibonacci"));
}

#[test]
fn even_numbers_agree_with_a_filtered_range() {
    let mut rng: ThreadRng = rand::rng();
    for _ in 0..100 {
        let start: i32 = rng.random_range(-500..500);
        let finish: i32 = rng.random_range(start..start + 200);
        let args: Vec<String> = vec![start.to_string(), finish.to_string()];

        let expected: String = (start..=finish)
            .filter(|n| n % 2 == 0)
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        assert_eq!(evaluate("even-numbers", &args), Ok(expected), "{start}..={finish}");
    }
}

#[test]
fn non_finite_measures_are_rejected_by_name() {
    for text in ["NaN", "inf", "-inf", "infinity"] {
        let args: Vec<String> = vec![text.to_string()];
        for (exercise, parameter) in [
            ("area-circle", "radius"),
            ("inches-to-cm", "inches"),
            ("pounds-to-kg", "pounds"),
        ] {
            let err: CatalogError = evaluate(exercise, &args).unwrap_err();
            let rejected_by_name: bool = matches!(
                &err,
                CatalogError::Invalid(InputError::NotFinite { name, .. }) if *name == parameter
            );
            assert!(rejected_by_name, "{exercise} {text} gave {err}");
        }
    }
}
