//! Monad type class - sequencing computations within a context.
//!
//! `Monad` adds `flat_map` (known elsewhere as `chain` or bind): the
//! function receives the inner value and returns a whole new container,
//! which is returned as-is rather than nested inside another layer.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mapchain::typeclass::{Container, Monad};
//!
//! let result = Container::new(5)
//!     .flat_map(|n| Container::new(n * 2))
//!     .flat_map(|n| Container::new(n + 1));
//! assert_eq!(result, Container::new(11));
//! ```

use super::applicative::Applicative;
use super::container::Container;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` must flatten exactly one level: the container returned by
/// `function` is the result, never wrapped again.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// The monad produced by `function`, or the short-circuited state
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Option::and_then` / `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is in a short-circuiting state, that state propagates and
    /// `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Container<A> Implementation
// =============================================================================

impl<A> Monad for Container<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Container<B>
    where
        F: FnOnce(A) -> Container<B>,
    {
        self.chain(function)
    }
}
