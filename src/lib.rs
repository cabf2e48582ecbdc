//! # mapchain
//!
//! Small composable containers for Rust: a base [`Container`], an
//! [`Optional`] for values that may be missing, and an [`Outcome`] for
//! validations that may fail. Each one is built up with `map`/`chain` and
//! finished with a single terminal operation.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over a GAT-based
//!   `TypeConstructor`
//! - **Control Structures**: `Optional` (absence short-circuits) and
//!   `Outcome` (the first failure short-circuits)
//! - **Function Composition**: `curry2!` and `pipe!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Container`
//! - `control`: `Optional` and `Outcome`
//! - `compose`: `curry2!` and `pipe!`
//! - `serde`: `Serialize`/`Deserialize` for all containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use mapchain::prelude::*;
//!
//! fn discount(price: f64) -> Outcome<f64, String> {
//!     if price < 10.0 {
//!         Outcome::failure("cannot discount cheap items".to_string())
//!     } else {
//!         Outcome::success(price - price * 0.10)
//!     }
//! }
//!
//! let message = Outcome::success(11.0)
//!     .chain(discount)
//!     .map(|price| price + price * 0.25)
//!     .fold(|error| format!("Error: {error}"), |total| format!("Total: {total:.3}"));
//! assert_eq!(message, "Total: 12.375");
//! ```
//!
//! [`Container`]: crate::typeclass::Container
//! [`Optional`]: crate::control::Optional
//! [`Outcome`]: crate::control::Outcome

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use mapchain::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
