use result_rail::convert::*;
use result_rail::traits::ResultExt;
use result_rail::{Failure, Outcome, Success};

#[test]
fn outcome_to_result_handles_both_variants() {
    let fine: Outcome<i32, &str> = Success(7);
    assert_eq!(outcome_to_result(fine), Ok(7));

    let broken: Outcome<i32, &str> = Failure("boom");
    assert_eq!(outcome_to_result(broken), Err("boom"));
}

#[test]
fn result_to_outcome_preserves_state() {
    let ok: Result<i32, &str> = Ok(3);
    assert_eq!(result_to_outcome(ok), Success(3));

    let err: Result<i32, &str> = Err("fail");
    assert_eq!(result_to_outcome(err), Failure("fail"));
}

#[test]
fn from_impl_wraps_results() {
    let outcome: Outcome<i32, &str> = Ok(3).into();
    assert_eq!(outcome, Success(3));

    let outcome: Outcome<i32, &str> = Outcome::from(Err("fail"));
    assert_eq!(outcome, Failure("fail"));
}

#[test]
fn conversions_round_trip_between_the_two_types() {
    let original: Result<i32, &str> = Err("kept");
    assert_eq!(outcome_to_result(result_to_outcome(original)), original);

    let outcome: Outcome<i32, &str> = Success(11);
    assert_eq!(result_to_outcome(outcome_to_result(outcome)), outcome);
}

#[test]
fn result_ext_lifts_at_the_end_of_a_chain() {
    let parsed = "5".parse::<i32>().map_err(|e| e.to_string()).into_outcome();
    assert_eq!(parsed, Success(5));

    let failed = "five".parse::<i32>().map_err(|_| "not a digit").into_outcome();
    assert_eq!(failed, Failure("not a digit"));
}

#[test]
fn collecting_all_successes_builds_the_collection() {
    let outcomes = vec![Success(1), Success(2), Success(3)];
    let collected: Outcome<Vec<i32>, &str> = outcomes.into_iter().collect();
    assert_eq!(collected, Success(vec![1, 2, 3]));

    let none: Vec<Outcome<i32, &str>> = vec![];
    let collected: Outcome<Vec<i32>, &str> = none.into_iter().collect();
    assert_eq!(collected, Success(vec![]));
}

#[test]
fn collecting_keeps_the_first_failure_only() {
    let outcomes = vec![Success(1), Failure("bad"), Failure("worse"), Success(4)];
    let collected: Outcome<Vec<i32>, &str> = outcomes.into_iter().collect();
    assert_eq!(collected, Failure("bad"));
}

#[test]
fn collecting_stops_consuming_after_the_first_failure() {
    let mut pulled = 0;
    let outcomes: [Outcome<i32, &str>; 4] = [Success(1), Success(2), Failure("bad"), Success(4)];
    let collected: Outcome<Vec<i32>, &str> = outcomes
        .into_iter()
        .inspect(|_| pulled += 1)
        .collect();

    assert_eq!(collected, Failure("bad"));
    assert_eq!(pulled, 3);
}
