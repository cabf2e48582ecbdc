//! Optional - a value that may be present or absent.
//!
//! `Optional<T>` is either `Present(T)` or `Absent`. Once a chain reaches
//! `Absent`, every later `map`/`chain` passes it through without calling the
//! supplied function, so lookups on possibly missing data can be written as
//! straight-line composition and resolved once with
//! [`get_or_else`](Optional::get_or_else).
//!
//! # Examples
//!
//! ```rust
//! use mapchain::control::Optional;
//!
//! let table = [("en", "mysite.com/en"), ("sp", "mysite.com/sp")];
//! let lookup = |language: &str| {
//!     Optional::from(table.iter().find(|(key, _)| *key == language).map(|(_, url)| *url))
//! };
//!
//! assert_eq!(Optional::of("sp").chain(lookup).get_or_else("default"), "mysite.com/sp");
//! assert_eq!(Optional::of("jp").chain(lookup).get_or_else("default"), "default");
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A container that either holds a value or is empty.
///
/// `Present` never wraps the absent sentinel: in Rust the sentinel is
/// `Option::None`, and every constructor taking an `Option` maps `None` to
/// `Absent`.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is held.
    Present(T),
    /// No value is held.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds an `Optional` from a raw value that may be the absent sentinel.
    ///
    /// Anything convertible into `Option<T>` is accepted: a bare `T` becomes
    /// `Present`, `None` becomes `Absent`. When passing an `Option` whose
    /// payload type is not otherwise pinned down, prefer
    /// [`Optional::from`] to avoid an ambiguous conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Optional;
    ///
    /// assert_eq!(Optional::of(3), Optional::Present(3));
    /// assert_eq!(Optional::<i32>::of(None), Optional::Absent);
    /// ```
    #[inline]
    pub fn of<R>(raw: R) -> Self
    where
        R: Into<Option<T>>,
    {
        raw.into().map_or(Self::Absent, Self::Present)
    }

    /// Wraps a value known to be present.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the empty `Optional`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// `Absent` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Optional;
    ///
    /// assert_eq!(Optional::of(2).map(|n| n * 10), Optional::Present(20));
    /// assert_eq!(Optional::<i32>::absent().map(|n| n * 10), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies a function whose result may itself be missing.
    ///
    /// This is the field-access form of `map`: when `function` yields
    /// `None` the result collapses to `Absent` instead of holding an empty
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Optional;
    ///
    /// let first_char = |text: &str| text.chars().next();
    ///
    /// assert_eq!(Optional::of("abc").map_nullable(first_char), Optional::Present('a'));
    /// assert_eq!(Optional::of("").map_nullable(first_char), Optional::Absent);
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Optional::from(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `function`, which returns an `Optional`, and returns that
    /// result directly.
    ///
    /// `Absent` short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Optional;
    ///
    /// let positive = |n: i32| if n > 0 { Optional::of(n) } else { Optional::absent() };
    ///
    /// assert_eq!(Optional::of(4).chain(positive), Optional::Present(4));
    /// assert_eq!(Optional::of(-4).chain(positive), Optional::Absent);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Terminal Unwrap
    // =========================================================================

    /// Returns the held value, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::control::Optional;
    ///
    /// assert_eq!(Optional::of(3).get_or_else(5), 3);
    /// assert_eq!(Optional::<i32>::of(None).get_or_else(5), 5);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or computes a default when absent.
    ///
    /// `default` is only called for `Absent`.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(first), Optional::Present(second)) => {
                Optional::Present(function(first, second))
            }
            _ => Optional::Absent,
        }
    }
}

impl<T> Monad for Optional<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        self.chain(function)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(v)` becomes `Present(v)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(3), Optional::Present(3))]
    #[case(None, Optional::Absent)]
    fn test_from_option(#[case] raw: Option<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(Optional::from(raw), expected);
    }

    #[rstest]
    fn test_of_bare_value_is_present() {
        let value = Optional::of("text");
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_map_does_not_invoke_function() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });

        assert_eq!(result, Optional::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_absent_chain_does_not_invoke_function() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().chain(|n| {
            calls.set(calls.get() + 1);
            Optional::of(n)
        });

        assert_eq!(result, Optional::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_nullable_collapses_none() {
        let result = Optional::of(vec![1, 2]).map_nullable(|values| values.get(5).copied());
        assert_eq!(result, Optional::Absent);
    }

    #[rstest]
    fn test_get_or_else_with_is_lazy_for_present() {
        let result = Optional::of(1).get_or_else_with(|| panic!("default must not be built"));
        assert_eq!(result, 1);
    }

    #[rstest]
    #[case(Optional::Present(1), Optional::Present(2), Optional::Present(3))]
    #[case(Optional::Present(1), Optional::Absent, Optional::Absent)]
    #[case(Optional::Absent, Optional::Present(2), Optional::Absent)]
    fn test_map2(
        #[case] first: Optional<i32>,
        #[case] second: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let option: Option<i32> = Optional::of(8).into();
        assert_eq!(option, Some(8));
        let option: Option<i32> = Optional::absent().into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_default_is_absent() {
        assert_eq!(Optional::<String>::default(), Optional::Absent);
    }
}
