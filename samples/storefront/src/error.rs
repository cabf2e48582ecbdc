//! Error types for the storefront.
//!
//! [`PriceError`] travels inside `Outcome::Failure` through the price
//! pipeline. [`ConfigError`] and [`StorefrontError`] are ordinary
//! `Result` errors for start-up.

use thiserror::Error;

/// Why an item could not be priced.
///
/// # Examples
///
/// ```
/// use storefront::error::PriceError;
///
/// assert_eq!(PriceError::NotNumeric.message(), "price must be numeric");
/// assert_eq!(PriceError::TooCheap.to_string(), "cannot discount cheap items");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The item's price is not a number.
    #[error("price must be numeric")]
    NotNumeric,
    /// The item's price is below the discount threshold.
    #[error("cannot discount cheap items")]
    TooCheap,
}

impl PriceError {
    /// Human-readable message for the error handler.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Configuration loading error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed or is out of range.
    #[error("Invalid value for {key}: {message}")]
    Invalid {
        /// The name of the configuration key.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl ConfigError {
    /// Creates an [`ConfigError::Invalid`] for `key`.
    #[must_use]
    pub fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Top-level error for the storefront binary.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Embedded catalogue or user data could not be parsed.
    #[error("failed to parse storefront data: {0}")]
    Data(#[from] serde_json::Error),
}
