//! Integration tests for `curry2!` and `pipe!` used with the containers.

#![cfg(all(feature = "compose", feature = "control"))]

use std::cell::Cell;

use mapchain::control::{Optional, Outcome};
use mapchain::{curry2, pipe};
use rstest::rstest;

fn scale(factor: i32, value: i32) -> i32 {
    value * factor
}

fn at_least(minimum: i32, value: i32) -> Outcome<i32, String> {
    if value < minimum {
        Outcome::failure(format!("{value} is below {minimum}"))
    } else {
        Outcome::success(value)
    }
}

// =============================================================================
// curry2!
// =============================================================================

#[rstest]
fn test_curried_step_is_reusable() {
    let triple = curry2!(scale)(3);

    assert_eq!(Optional::of(2).map(&triple), Optional::Present(6));
    assert_eq!(Optional::of(5).map(&triple), Optional::Present(15));
}

#[rstest]
#[case(15, Outcome::Success(15))]
#[case(5, Outcome::Failure("5 is below 10".to_string()))]
fn test_curried_validation_in_chain(#[case] input: i32, #[case] expected: Outcome<i32, String>) {
    let at_least_ten = curry2!(at_least)(10);
    assert_eq!(Outcome::success(input).chain(at_least_ten), expected);
}

#[rstest]
fn test_curried_step_skipped_after_failure() {
    let calls = Cell::new(0);
    let counted = curry2!(|minimum: i32, value: i32| {
        calls.set(calls.get() + 1);
        at_least(minimum, value)
    });

    let result = Outcome::success(1)
        .chain(counted(10))
        .chain(counted(0));

    assert_eq!(result, Outcome::Failure("1 is below 10".to_string()));
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// pipe!
// =============================================================================

#[rstest]
fn test_pipe_applies_left_to_right() {
    let double = curry2!(scale)(2);
    let doubled = |o: Optional<i32>| o.map(&double);
    let unwrap = |o: Optional<i32>| o.get_or_else(0);

    assert_eq!(pipe!(Optional::of(5), doubled, unwrap), 10);
    assert_eq!(pipe!(Optional::absent(), doubled, unwrap), 0);
}

#[rstest]
fn test_pipe_over_outcome_steps() {
    let validate = |o: Outcome<i32, String>| o.chain(|v| at_least(10, v));
    let add_tax = |o: Outcome<i32, String>| o.map(|v| v + v / 4);
    let report = |o: Outcome<i32, String>| o.fold(|e| format!("Error: {e}"), |v| format!("Total: {v}"));

    assert_eq!(pipe!(Outcome::success(20), validate, add_tax, report), "Total: 25");
    assert_eq!(
        pipe!(Outcome::success(4), validate, add_tax, report),
        "Error: 4 is below 10"
    );
}
