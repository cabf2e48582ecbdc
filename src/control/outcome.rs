//! Outcome - the result of a computation that may fail validation.
//!
//! `Outcome<S, E>` is either `Success(S)` or `Failure(E)`. Validating steps
//! return one or the other instead of panicking, and are composed with
//! [`chain`](Outcome::chain). The first `Failure` absorbs the rest of the
//! chain: later steps are never called, so exactly one error (the first)
//! reaches the terminal [`fold`](Outcome::fold).
//!
//! The type is named `Outcome` rather than `Result` so it can sit beside
//! `std::result::Result`; the two convert into each other losslessly.
//!
//! # Examples
//!
//! ```rust
//! use mapchain::control::Outcome;
//!
//! fn non_negative(value: i32) -> Outcome<i32, String> {
//!     if value < 0 {
//!         Outcome::failure("negative".to_string())
//!     } else {
//!         Outcome::success(value)
//!     }
//! }
//!
//! let report = Outcome::success(-1)
//!     .chain(non_negative)
//!     .map(|n| n * 2)
//!     .fold(|error| format!("Error: {error}"), |total| format!("Total: {total}"));
//! assert_eq!(report, "Error: negative");
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a success or a failure.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `E` - The type of the failure payload, usually carrying a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, E> {
    /// The computation produced a value.
    Success(S),
    /// The computation was rejected.
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success`.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn success_value(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<S, E>` to `Outcome<&S, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value.
    ///
    /// A `Failure` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Outcome;
    ///
    /// let doubled: Outcome<i32, &str> = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("bad").map(|n: i32| n * 2);
    /// assert_eq!(failed, Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the failure payload, leaving a success alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(failed.map_failure(str::len), Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Outcome<S, T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies a validating step to the success value and returns its
    /// result directly.
    ///
    /// A `Failure` short-circuits: `function` is not called and the same
    /// failure is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Outcome;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
    /// };
    ///
    /// assert_eq!(Outcome::success(8).chain(halve).chain(halve), Outcome::Success(2));
    /// assert_eq!(Outcome::success(6).chain(halve).chain(halve), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce(S) -> Outcome<T, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Outcome` by calling exactly one of two handlers.
    ///
    /// `on_failure` receives the failure payload, `on_success` the value;
    /// the handler's return value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Outcome;
    ///
    /// let success: Outcome<f64, String> = Outcome::success(9.5);
    /// assert_eq!(success.fold(|_| 0.0, |total| total * 2.0), 19.0);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(S) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<S, E> TypeConstructor for Outcome<S, E> {
    type Inner = S;
    type WithType<B> = Outcome<B, E>;
}

impl<S, E: Clone> Functor for Outcome<S, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&S) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<S, E: Clone> Applicative for Outcome<S, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    /// Combines two outcomes; the left failure wins when both failed.
    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Outcome::Success(second)) => {
                Outcome::Success(function(first, second))
            }
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }
}

impl<S, E: Clone> Monad for Outcome<S, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(S) -> Outcome<B, E>,
    {
        self.chain(function)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    #[inline]
    fn from(outcome: Outcome<S, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_success_construction() {
        let value: Outcome<i32, String> = Outcome::success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn test_failure_construction() {
        let value: Outcome<i32, String> = Outcome::failure("boom".to_string());
        assert!(value.is_failure());
        assert_eq!(value.failure_value(), Some("boom".to_string()));
    }

    #[rstest]
    fn test_failure_map_does_not_invoke_function() {
        let calls = Cell::new(0);
        let result: Outcome<i32, &str> = Outcome::failure("first").map(|n: i32| {
            calls.set(calls.get() + 1);
            n
        });

        assert_eq!(result, Outcome::Failure("first"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_fold_calls_exactly_one_handler() {
        let failure_calls = Cell::new(0);
        let success_calls = Cell::new(0);

        let outcome: Outcome<i32, &str> = Outcome::success(1);
        outcome.fold(
            |_| failure_calls.set(failure_calls.get() + 1),
            |_| success_calls.set(success_calls.get() + 1),
        );

        assert_eq!(failure_calls.get(), 0);
        assert_eq!(success_calls.get(), 1);
    }

    #[rstest]
    fn test_map_failure_leaves_success() {
        let outcome: Outcome<i32, &str> = Outcome::success(5);
        assert_eq!(outcome.map_failure(str::len), Outcome::Success(5));
    }

    #[rstest]
    #[case(Outcome::Success(1), Outcome::Success(2), Outcome::Success(3))]
    #[case(Outcome::Failure("left"), Outcome::Failure("right"), Outcome::Failure("left"))]
    #[case(Outcome::Success(1), Outcome::Failure("right"), Outcome::Failure("right"))]
    fn test_map2_keeps_first_failure(
        #[case] first: Outcome<i32, &'static str>,
        #[case] second: Outcome<i32, &'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<i32, String> = err.into();
        assert_eq!(outcome, Outcome::Failure("error".to_string()));
    }
}
