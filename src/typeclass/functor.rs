//! Functor type class - mapping over container values.
//!
//! A `Functor` is any container that can have a function applied to the
//! value it holds while keeping its shape. This is the explicit,
//! trait-based form of "anything with a `map` method".
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mapchain::typeclass::{Container, Functor};
//!
//! let wrapped = Container::new(5);
//! let transformed = wrapped.fmap(|n| n.to_string());
//! assert_eq!(transformed.into_inner(), "5");
//! ```

use super::container::Container;
use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// Implementations never mutate the receiver: `fmap` consumes `self` and
/// returns a new container, `fmap_ref` borrows it and builds a new one.
///
/// # Examples
///
/// ```rust
/// use mapchain::typeclass::{Container, Functor};
///
/// fn increment<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
///     container.fmap(|n| n + 1)
/// }
///
/// assert_eq!(increment(Container::new(1)), Container::new(2));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the original container must stay available, or when the
    /// inner type is not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::typeclass::{Container, Functor};
    ///
    /// let name = Container::new("hello".to_string());
    /// let length = name.fmap_ref(|s| s.len());
    /// assert_eq!(length.into_inner(), 5);
    /// assert_eq!(name.as_inner(), "hello");
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Container<A> Implementation
// =============================================================================

impl<A> Functor for Container<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Container<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Container<B>
    where
        F: FnOnce(&A) -> B,
    {
        Container::new(function(self.as_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-3)]
    fn container_identity_law(#[case] value: i32) {
        assert_eq!(Container::new(value).fmap(|x| x), Container::new(value));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    fn container_composition_law(#[case] value: i32) {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = Container::new(value).fmap(function1).fmap(function2);
        let right = Container::new(value).fmap(|x| function2(function1(x)));

        assert_eq!(left, right);
    }

    #[rstest]
    fn container_fmap_ref_leaves_original_untouched() {
        let original = Container::new(vec![1, 2, 3]);
        let total = original.fmap_ref(|values| values.iter().sum::<i32>());

        assert_eq!(total, Container::new(6));
        assert_eq!(original.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn container_replace_and_void() {
        assert_eq!(Container::new(1).replace("x"), Container::new("x"));
        assert_eq!(Container::new(1).void(), Container::new(()));
    }
}
