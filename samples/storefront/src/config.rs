//! Storefront configuration management.
//!
//! Configuration is read once at start-up from environment variables (a
//! `.env` file is honoured when present). Every key has a default, so an
//! empty environment yields the standard storefront; a value that is set
//! but cannot be parsed, or is out of range, is an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront::config::StoreConfig;
//!
//! let config = StoreConfig::from_env()?;
//! println!("Tax rate: {}", config.tax_rate);
//! ```

use std::env;
use std::str::FromStr;

use mapchain::control::Outcome;

use crate::error::ConfigError;

const TAX_RATE_KEY: &str = "STORE_TAX_RATE";
const DISCOUNT_RATE_KEY: &str = "STORE_DISCOUNT_RATE";
const DISCOUNT_THRESHOLD_KEY: &str = "STORE_DISCOUNT_THRESHOLD";
const DEFAULT_INDEX_URL_KEY: &str = "STORE_DEFAULT_INDEX_URL";

/// Storefront configuration.
///
/// # Fields
///
/// - `tax_rate`: Fraction of the price added as tax (`STORE_TAX_RATE`, default 0.25)
/// - `discount_rate`: Fraction of the price taken off (`STORE_DISCOUNT_RATE`, default 0.10)
/// - `discount_threshold`: Lowest price a discount applies to
///   (`STORE_DISCOUNT_THRESHOLD`, default 10)
/// - `default_index_url`: Page shown when no localized page is found
///   (`STORE_DEFAULT_INDEX_URL`, default `http://site.com/en`)
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Tax added on top of the discounted price.
    pub tax_rate: f64,
    /// Discount taken off the raw price.
    pub discount_rate: f64,
    /// Prices below this cannot be discounted.
    pub discount_threshold: f64,
    /// Fallback index page.
    pub default_index_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.25,
            discount_rate: 0.10,
            discount_threshold: 10.0,
            default_index_url: "http://site.com/en".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set to a value that
    /// cannot be parsed or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for unparsable or out-of-range values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tax_rate = get_rate(&lookup, TAX_RATE_KEY, defaults.tax_rate)?;
        let discount_rate = get_rate(&lookup, DISCOUNT_RATE_KEY, defaults.discount_rate)?;
        let discount_threshold = Result::from(
            get_parsed(&lookup, DISCOUNT_THRESHOLD_KEY, defaults.discount_threshold)
                .chain(|threshold| non_negative(DISCOUNT_THRESHOLD_KEY, threshold)),
        )?;
        let default_index_url = lookup(DEFAULT_INDEX_URL_KEY)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.default_index_url);

        Ok(Self {
            tax_rate,
            discount_rate,
            discount_threshold,
            default_index_url,
        })
    }
}

fn get_rate<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get_parsed(lookup, key, default)
        .chain(|rate| non_negative(key, rate))
        .chain(|rate| {
            if rate > 1.0 {
                Outcome::failure(ConfigError::invalid(key, "must be between 0 and 1"))
            } else {
                Outcome::success(rate)
            }
        })
        .into()
}

fn get_parsed<F, T>(lookup: &F, key: &str, default: T) -> Outcome<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Outcome::success(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|error| ConfigError::invalid(key, format!("{raw:?}: {error}")))
            .into(),
    }
}

fn non_negative(key: &str, value: f64) -> Outcome<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Outcome::success(value)
    } else {
        Outcome::failure(ConfigError::invalid(key, "must be a finite, non-negative number"))
    }
}
