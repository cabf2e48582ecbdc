//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Each function is
/// called exactly once, so [`FnOnce`] is enough.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use mapchain::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(5, double, add_one), 11);
/// ```
///
/// ## Container-level steps
///
/// ```
/// use mapchain::control::Outcome;
/// use mapchain::pipe;
///
/// let validate = |outcome: Outcome<i32, &'static str>| {
///     outcome.chain(|n| if n > 0 { Outcome::success(n) } else { Outcome::failure("not positive") })
/// };
/// let double = |outcome: Outcome<i32, &'static str>| outcome.map(|n| n * 2);
///
/// assert_eq!(pipe!(Outcome::success(4), validate, double), Outcome::Success(8));
/// assert_eq!(pipe!(Outcome::success(-4), validate, double), Outcome::Failure("not positive"));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
