//! Type class traits for functional programming abstractions.
//!
//! This module provides the capability traits that any container in this
//! crate implements, plus the plain [`Container`] they are modelled on:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining two contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them, which
//! lets `Functor` and `Monad` be written once for every container.
//!
//! # Examples
//!
//! ## Writing code against the capability, not the type
//!
//! ```rust
//! use mapchain::typeclass::{Container, Functor};
//! use mapchain::control::Optional;
//!
//! fn shout<F: Functor<Inner = &'static str>>(container: F) -> F::WithType<String> {
//!     container.fmap(|text| text.to_uppercase())
//! }
//!
//! assert_eq!(shout(Container::new("hi")).into_inner(), "HI");
//! assert_eq!(shout(Optional::of("hi")).get_or_else("none".to_string()), "HI");
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use mapchain::typeclass::{Applicative, Container};
//!
//! let sum = Container::new(1).map2(Container::new(2), |x, y| x + y);
//! assert_eq!(sum.into_inner(), 3);
//! ```

mod applicative;
mod container;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use container::Container;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
