//! Function composition utilities.
//!
//! - [`curry2!`]: Convert a two-argument function into curried form, so a
//!   dependency can be bound once and the remaining one-argument function
//!   passed to `map`/`chain`
//! - [`pipe!`]: Apply functions to a value left to right
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use mapchain::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = curry2!(add)(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Pipeline
//!
//! ```
//! use mapchain::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! # Background
//!
//! ```text
//! curry(f)(a)(b)     = f(a, b)
//! x |> f |> g        = g(f(x))
//! ```

mod curry_macro;
mod pipe_macro;
