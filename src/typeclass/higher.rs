//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] works around this with a GAT so that the
//! capability traits ([`Functor`](super::Functor), [`Monad`](super::Monad))
//! can talk about "the same container holding a different type".
//!
//! # Example
//!
//! ```rust
//! use mapchain::typeclass::{Container, TypeConstructor};
//!
//! fn retag<T: TypeConstructor>(_value: &T) -> &'static str
//! where
//!     T::WithType<String>: TypeConstructor<Inner = String>,
//! {
//!     "same constructor, String inside"
//! }
//!
//! assert_eq!(retag(&Container::new(42)), "same constructor, String inside");
//! ```

/// A trait representing a type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Container<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a valid type constructor so that
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
