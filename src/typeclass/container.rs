//! Container - the base single-value wrapper.
//!
//! `Container` holds exactly one value and adds no behaviour of its own.
//! It is the plain reference model for the capability traits: every law
//! stated on [`Functor`](super::Functor) and [`Monad`](super::Monad) holds
//! for it trivially, which makes it the baseline the specialised containers
//! ([`Optional`](crate::control::Optional),
//! [`Outcome`](crate::control::Outcome)) are compared against.

use super::TypeConstructor;

/// A wrapper around a single, exclusively owned value.
///
/// The value is never mutated in place. [`map`](Container::map) and
/// [`chain`](Container::chain) consume the container and return a new one.
///
/// # Examples
///
/// ```rust
/// use mapchain::typeclass::Container;
///
/// let wrapped = Container::new(1);
/// let incremented = wrapped.map(|n| n + 1);
/// assert_eq!(incremented.into_inner(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Container<A> {
    value: A,
}

impl<A> Container<A> {
    /// Creates a new `Container` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self { value }
    }

    /// Consumes the `Container` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.value
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.value
    }

    /// Applies `transform` to the held value and wraps the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::typeclass::Container;
    ///
    /// let greeting = Container::new("world").map(|name| format!("hello {name}"));
    /// assert_eq!(greeting.as_inner(), "hello world");
    /// ```
    #[inline]
    pub fn map<B, F>(self, transform: F) -> Container<B>
    where
        F: FnOnce(A) -> B,
    {
        Container::new(transform(self.value))
    }

    /// Applies `transform`, which itself returns a container, and returns
    /// that container directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapchain::typeclass::Container;
    ///
    /// let parsed = Container::new("42").chain(|raw| Container::new(raw.len()));
    /// assert_eq!(parsed, Container::new(2));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, transform: F) -> Container<B>
    where
        F: FnOnce(A) -> Container<B>,
    {
        transform(self.value)
    }
}

impl<A> Container<Container<A>> {
    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use mapchain::typeclass::Container;
    ///
    /// let nested = Container::new(Container::new(3));
    /// assert_eq!(nested.flatten(), Container::new(3));
    /// ```
    #[inline]
    pub fn flatten(self) -> Container<A> {
        self.chain(|inner| inner)
    }
}

impl<A> TypeConstructor for Container<A> {
    type Inner = A;
    type WithType<B> = Container<B>;
}

impl<A> From<A> for Container<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
