use result_rail::{Failure, Outcome, Success};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn divide(a: f64, b: f64) -> Outcome<f64, String> {
    if b == 0.0 {
        return Failure("division by zero".to_string());
    }
    Success(a / b)
}

#[test]
fn test_is_ok_and_is_err_are_mutually_exclusive() {
    let fine: Outcome<i32, &str> = Success(1);
    assert!(fine.is_ok());
    assert!(!fine.is_err());

    let broken: Outcome<i32, &str> = Failure("bad");
    assert!(!broken.is_ok());
    assert!(broken.is_err());
}

#[test]
fn test_is_ok_and_applies_predicate_only_to_success() {
    let fine: Outcome<i32, &str> = Success(4);
    assert!(fine.is_ok_and(|v| v % 2 == 0));
    assert!(!Outcome::<i32, &str>::Success(3).is_ok_and(|v| v % 2 == 0));
    assert!(!Outcome::<i32, &str>::Failure("bad").is_ok_and(|_| true));
}

#[test]
fn test_is_err_and_applies_predicate_only_to_failure() {
    let broken: Outcome<i32, &str> = Failure("timeout after 3s");
    assert!(broken.is_err_and(|e| e.starts_with("timeout")));
    assert!(!Outcome::<i32, &str>::Failure("refused").is_err_and(|e| e.starts_with("timeout")));
    assert!(!Outcome::<i32, &str>::Success(1).is_err_and(|_| true));
}

#[test]
fn test_expect_returns_success_payload() {
    let fine: Outcome<i32, &str> = Success(10);
    assert_eq!(fine.expect("should hold a value"), 10);
}

#[test]
#[should_panic(expected = "should hold a value: \"gone\"")]
fn test_expect_panics_with_message_and_payload() {
    let broken: Outcome<i32, &str> = Failure("gone");
    broken.expect("should hold a value");
}

#[test]
fn test_expect_err_returns_failure_payload() {
    let broken: Outcome<i32, &str> = Failure("gone");
    assert_eq!(broken.expect_err("should hold an error"), "gone");
}

#[test]
#[should_panic(expected = "should hold an error: 10")]
fn test_expect_err_panics_on_success() {
    let fine: Outcome<i32, &str> = Success(10);
    fine.expect_err("should hold an error");
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value: \"division by zero\"")]
fn test_unwrap_panics_on_failure() {
    divide(10.0, 0.0).unwrap();
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap_err()` on a `Success` value: 5.0")]
fn test_unwrap_err_panics_on_success() {
    divide(10.0, 2.0).unwrap_err();
}

#[test]
fn test_unwrap_or_else_computes_fallback_from_error() {
    let broken: Outcome<usize, &str> = Failure("four");
    assert_eq!(broken.unwrap_or_else(|e| e.len()), 4);

    let fine: Outcome<usize, &str> = Success(11);
    assert_eq!(fine.unwrap_or_else(|e| e.len()), 11);
}

#[test]
fn test_unwrap_or_default_falls_back_to_type_default() {
    let broken: Outcome<String, &str> = Failure("no name");
    assert_eq!(broken.unwrap_or_default(), String::new());

    let fine: Outcome<String, &str> = Success("tram".to_string());
    assert_eq!(fine.unwrap_or_default(), "tram");
}

#[test]
fn test_ok_and_err_convert_to_options() {
    let fine: Outcome<i32, &str> = Success(2);
    assert_eq!(fine.ok(), Some(2));
    assert_eq!(Outcome::<i32, &str>::Success(2).err(), None);

    let broken: Outcome<i32, &str> = Failure("bad");
    assert_eq!(broken.err(), Some("bad"));
    assert_eq!(Outcome::<i32, &str>::Failure("bad").ok(), None);
}

#[test]
fn test_as_ref_borrows_payload_in_place() {
    let fine: Outcome<String, String> = Success("keep".to_string());
    assert_eq!(fine.as_ref().map(String::len).ok(), Some(4));

    // Still usable afterwards; as_ref did not consume it.
    assert!(fine.is_ok());
}

#[test]
fn test_as_mut_allows_in_place_edits() {
    let mut broken: Outcome<i32, String> = Failure("soft".to_string());
    if let Failure(error) = broken.as_mut() {
        error.push_str(" failure");
    }
    assert_eq!(broken.unwrap_err(), "soft failure");
}

#[test]
fn test_map_transforms_success_and_keeps_failure() {
    let fine: Outcome<i32, &str> = Success(21);
    assert_eq!(fine.map(|v| v * 2), Success(42));

    let broken: Outcome<i32, &str> = Failure("stale");
    assert_eq!(broken.map(|v| v * 2), Failure("stale"));
}

#[test]
fn test_map_err_transforms_failure_and_keeps_success() {
    let broken: Outcome<i32, u32> = Failure(404);
    assert_eq!(broken.map_err(|c| format!("code {c}")), Failure("code 404".to_string()));

    let fine: Outcome<i32, u32> = Success(2);
    assert_eq!(fine.map_err(|c| format!("code {c}")), Success(2));
}

#[test]
fn test_map_or_uses_default_on_failure() {
    let fine: Outcome<&str, &str> = Success("foo");
    assert_eq!(fine.map_or(42, |v| v.len()), 3);

    let broken: Outcome<&str, &str> = Failure("bar");
    assert_eq!(broken.map_or(42, |v| v.len()), 42);
}

#[test]
fn test_map_or_else_computes_both_branches_lazily() {
    let fine: Outcome<&str, &str> = Success("foo");
    assert_eq!(fine.map_or_else(|e| e.len() * 10, |v| v.len()), 3);

    let broken: Outcome<&str, &str> = Failure("bar");
    assert_eq!(broken.map_or_else(|e| e.len() * 10, |v| v.len()), 30);
}

#[test]
fn test_and_prefers_second_operand_on_success() {
    let fine: Outcome<i32, &str> = Success(1);
    assert_eq!(fine.and(Outcome::<&str, &str>::Success("next")), Success("next"));

    let broken: Outcome<i32, &str> = Failure("early");
    assert_eq!(broken.and(Outcome::<&str, &str>::Success("next")), Failure("early"));
}

#[test]
fn test_and_then_chains_fallible_steps() {
    fn checked_halve(n: i32) -> Outcome<i32, String> {
        if n % 2 == 0 {
            Success(n / 2)
        } else {
            Failure(format!("{n} is odd"))
        }
    }

    let chained = Outcome::<i32, String>::Success(8)
        .and_then(checked_halve)
        .and_then(checked_halve);
    assert_eq!(chained, Success(2));

    let stuck = Outcome::<i32, String>::Success(6)
        .and_then(checked_halve)
        .and_then(checked_halve);
    assert_eq!(stuck, Failure("3 is odd".to_string()));
}

#[test]
fn test_or_prefers_second_operand_on_failure() {
    let broken: Outcome<i32, &str> = Failure("early");
    assert_eq!(broken.or(Outcome::<i32, &str>::Success(2)), Success(2));

    let fine: Outcome<i32, &str> = Success(5);
    assert_eq!(fine.or(Outcome::<i32, &str>::Success(100)), Success(5));
}

#[test]
fn test_or_else_recovers_from_failure() {
    let broken: Outcome<i32, &str> = Failure("missing");
    let recovered = broken.or_else(|e| Outcome::<i32, usize>::Success(e.len() as i32));
    assert_eq!(recovered, Success(7));

    let fine: Outcome<i32, &str> = Success(3);
    let kept = fine.or_else(|_| Outcome::<i32, usize>::Failure(0));
    assert_eq!(kept, Success(3));
}

#[test]
fn test_transpose_swaps_outcome_and_option() {
    let some: Outcome<Option<i32>, &str> = Success(Some(5));
    assert_eq!(some.transpose(), Some(Success(5)));

    let none: Outcome<Option<i32>, &str> = Success(None);
    assert_eq!(none.transpose(), None);

    let broken: Outcome<Option<i32>, &str> = Failure("blocked");
    assert_eq!(broken.transpose(), Some(Failure("blocked")));
}

#[test]
fn test_transpose_round_trips_through_option() {
    fn untranspose<T, E>(option: Option<Outcome<T, E>>) -> Outcome<Option<T>, E> {
        match option {
            None => Success(None),
            Some(outcome) => outcome.map(Some),
        }
    }

    let cases: [Outcome<Option<i32>, &str>; 3] =
        [Success(Some(5)), Success(None), Failure("blocked")];
    for case in cases {
        assert_eq!(untranspose(case.transpose()), case);
    }
}

#[test]
fn test_flatten_removes_one_level_per_call() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Success(Success(6));
    assert_eq!(nested.flatten(), Success(6));

    let inner_failure: Outcome<Outcome<i32, &str>, &str> = Success(Failure("deep"));
    assert_eq!(inner_failure.flatten(), Failure("deep"));

    let outer_failure: Outcome<Outcome<i32, &str>, &str> = Failure("shallow");
    assert_eq!(outer_failure.flatten(), Failure("shallow"));

    let doubly_nested: Outcome<Outcome<Outcome<i32, &str>, &str>, &str> =
        Success(Success(Success(6)));
    assert_eq!(doubly_nested.flatten().flatten(), Success(6));
}

#[test]
fn test_into_result_and_from_result_mirror_each_other() {
    let fine: Outcome<i32, &str> = Success(42);
    assert_eq!(fine.into_result(), Ok(42));

    let broken: Outcome<i32, &str> = Failure("bad");
    assert_eq!(broken.into_result(), Err("bad"));

    assert_eq!(Outcome::from_result(Ok::<_, &str>(42)), Success(42));
    assert_eq!(Outcome::from_result(Err::<i32, _>("bad")), Failure("bad"));
}

#[test]
fn test_constructor_functions_match_variants() {
    assert_eq!(Outcome::<i32, &str>::success(1), Success(1));
    assert_eq!(Outcome::<i32, &str>::failure("x"), Failure("x"));
}

#[cfg(feature = "std")]
#[test]
fn test_termination_report_covers_both_variants() {
    use std::process::Termination;

    let _ = Outcome::<(), &str>::Success(()).report();
    let _ = Outcome::<(), &str>::Failure("fatal").report();
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn test_outcome_serde_round_trip() {
    let fine = Outcome::<TestData, String>::Success(TestData { id: 1 });
    let serialized = serde_json::to_string(&fine).unwrap();
    let deserialized: Outcome<TestData, String> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(fine, deserialized);

    let broken = Outcome::<TestData, String>::Failure("error".to_string());
    let serialized_err = serde_json::to_string(&broken).unwrap();
    let deserialized_err: Outcome<TestData, String> =
        serde_json::from_str(&serialized_err).unwrap();
    assert_eq!(broken, deserialized_err);
}
