//! Applicative type class - lifting values and combining two contexts.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the context, and `map2`, which combines two independent values in
//! the same context with a binary function.
//!
//! `map2` is the only multi-argument combinator offered. There is no
//! `map3`/`traverse` machinery here on purpose; chains of more than two
//! values are written with [`Monad::flat_map`](super::Monad::flat_map).
//!
//! # Laws
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))          // homomorphism
//! fa.map2(pure(b), |a, _| a) == fa                     // right identity
//! pure(a).map2(fb, |_, b| b) == fb                     // left identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mapchain::typeclass::{Applicative, Container};
//!
//! let lifted: Container<i32> = <Container<()>>::pure(42);
//! assert_eq!(lifted, Container::new(42));
//!
//! let sum = Container::new(1).map2(Container::new(2), |x, y| x + y);
//! assert_eq!(sum, Container::new(3));
//! ```

use super::container::Container;
use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// `self` is inspected before `other`. If either side is in a
    /// short-circuiting state (absent, failed) the function is not called
    /// and the first such state encountered is returned.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Container<A> Implementation
// =============================================================================

impl<A> Applicative for Container<A> {
    #[inline]
    fn pure<B>(value: B) -> Container<B> {
        Container::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Container<B>, function: F) -> Container<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Container::new(function(self.into_inner(), other.into_inner()))
    }
}
