//! Short-circuiting containers.
//!
//! - [`Optional`]: a value that may be absent; absence propagates through
//!   `map`/`chain` and is resolved with a default at the end.
//! - [`Outcome`]: a success or a failure; the first failure propagates
//!   through `map`/`chain` untouched and is handled once by `fold`.
//!
//! Both implement [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative) and
//! [`Monad`](crate::typeclass::Monad).
//!
//! # Examples
//!
//! ## Absence propagation
//!
//! ```rust
//! use mapchain::control::Optional;
//!
//! let language: Optional<&str> = Optional::absent();
//! let url = language
//!     .map(|code| format!("mysite.com/{code}"))
//!     .get_or_else("mysite.com/en".to_string());
//! assert_eq!(url, "mysite.com/en");
//! ```
//!
//! ## Failure propagation
//!
//! ```rust
//! use mapchain::control::Outcome;
//!
//! let total: Outcome<f64, &str> = Outcome::success(5.0)
//!     .chain(|price| if price < 10.0 { Outcome::failure("too cheap") } else { Outcome::success(price) })
//!     .map(|price| price * 1.25);
//! assert_eq!(total, Outcome::Failure("too cheap"));
//! ```

mod optional;
mod outcome;

pub use optional::Optional;
pub use outcome::Outcome;

// Chains never share containers, so independent chains may run on
// different threads whenever the payloads allow it.
static_assertions::assert_impl_all!(Optional<String>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<f64, String>: Send, Sync);
static_assertions::assert_impl_all!(crate::typeclass::Container<i32>: Send, Sync);
