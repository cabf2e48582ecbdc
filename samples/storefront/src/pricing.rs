//! Discount-then-tax price pipeline.
//!
//! ```text
//! item_price -> parse_price -> discount -> tax -> fold(log_error, show_total)
//! ```
//!
//! Every step returns an `Outcome`. The first failing step decides the
//! reported error; the steps after it never run.

use mapchain::control::Outcome;
use mapchain::curry2;
use serde_json::Value;

use crate::catalog::Item;
use crate::config::StoreConfig;
use crate::error::PriceError;

/// Discount parameters: `rate` is taken off prices of at least `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscountRule {
    /// Fraction of the price taken off.
    pub rate: f64,
    /// Lowest price the discount applies to.
    pub threshold: f64,
}

/// All rules applied by [`total_price`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingRules {
    /// Discount applied first.
    pub discount: DiscountRule,
    /// Tax applied to the discounted price.
    pub tax_rate: f64,
}

impl From<&StoreConfig> for PricingRules {
    fn from(config: &StoreConfig) -> Self {
        Self {
            discount: DiscountRule {
                rate: config.discount_rate,
                threshold: config.discount_threshold,
            },
            tax_rate: config.tax_rate,
        }
    }
}

/// Starts the pipeline with the item's raw price.
pub fn item_price(item: &Item) -> Outcome<Value, PriceError> {
    Outcome::success(item.price.clone())
}

/// Accepts only numeric prices.
pub fn parse_price(raw: Value) -> Outcome<f64, PriceError> {
    raw.as_f64()
        .map_or(Outcome::failure(PriceError::NotNumeric), Outcome::success)
}

/// Takes the discount off, refusing prices below the threshold.
pub fn discount(rule: DiscountRule, price: f64) -> Outcome<f64, PriceError> {
    if price < rule.threshold {
        Outcome::failure(PriceError::TooCheap)
    } else {
        Outcome::success(price - price * rule.rate)
    }
}

/// Adds tax on top of `price`.
pub fn tax(rate: f64, price: f64) -> Outcome<f64, PriceError> {
    Outcome::success(price + rate * price)
}

/// Runs the full pipeline for one item.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storefront::catalog::Item;
/// use storefront::config::StoreConfig;
/// use storefront::error::PriceError;
/// use storefront::pricing::{PricingRules, total_price};
///
/// let rules = PricingRules::from(&StoreConfig::default());
///
/// let chips = Item::new("chips", json!(5));
/// assert_eq!(total_price(&rules, &chips).failure_value(), Some(PriceError::TooCheap));
/// ```
#[tracing::instrument(level = "debug", skip(rules, item), fields(item = %item.name))]
pub fn total_price(rules: &PricingRules, item: &Item) -> Outcome<f64, PriceError> {
    let add_discount = curry2!(discount)(rules.discount);
    let add_tax = curry2!(tax)(rules.tax_rate);

    item_price(item)
        .chain(parse_price)
        .chain(add_discount)
        .chain(add_tax)
}

/// Receives the single result of pricing an item.
pub trait PriceReporter {
    /// Called with the final price of a successfully priced item.
    fn show_total(&self, item: &Item, total: f64);

    /// Called with the first error met while pricing an item.
    fn log_error(&self, item: &Item, error: &PriceError);
}

/// Reports prices as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl PriceReporter for TracingReporter {
    fn show_total(&self, item: &Item, total: f64) {
        tracing::info!(item = %item.name, total, "Total Price: {total}");
    }

    fn log_error(&self, item: &Item, error: &PriceError) {
        tracing::warn!(item = %item.name, %error, "Error: {}", error.message());
    }
}

/// Prices `item` and hands the result to exactly one reporter method.
pub fn show_total_price<R>(reporter: &R, rules: &PricingRules, item: &Item)
where
    R: PriceReporter + ?Sized,
{
    total_price(rules, item).fold(
        |error| reporter.log_error(item, &error),
        |total| reporter.show_total(item, total),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn rules() -> PricingRules {
        PricingRules::from(&StoreConfig::default())
    }

    #[rstest]
    #[case(json!(11), Outcome::Success(11.0))]
    #[case(json!(2.5), Outcome::Success(2.5))]
    #[case(json!("10 dollars"), Outcome::Failure(PriceError::NotNumeric))]
    #[case(json!(null), Outcome::Failure(PriceError::NotNumeric))]
    fn test_parse_price(#[case] raw: Value, #[case] expected: Outcome<f64, PriceError>) {
        assert_eq!(parse_price(raw), expected);
    }

    #[rstest]
    fn test_discount_below_threshold(rules: PricingRules) {
        assert_eq!(discount(rules.discount, 5.0), Outcome::Failure(PriceError::TooCheap));
    }

    #[rstest]
    fn test_discount_at_threshold(rules: PricingRules) {
        let discounted = discount(rules.discount, 10.0).success_value().unwrap();
        assert!((discounted - 9.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_tax_adds_rate() {
        let taxed = tax(0.25, 9.9).success_value().unwrap();
        assert!((taxed - 12.375).abs() < 1e-9);
    }

    #[rstest]
    fn test_total_price_for_t_shirt(rules: PricingRules) {
        let total = total_price(&rules, &Item::new("t-shirt", json!(11)));
        let value = total.success_value().unwrap();
        assert!((value - 12.375).abs() < 1e-9);
    }

    #[rstest]
    fn test_rules_from_config() {
        let config = StoreConfig {
            tax_rate: 0.2,
            discount_rate: 0.3,
            discount_threshold: 50.0,
            default_index_url: String::new(),
        };
        let rules = PricingRules::from(&config);
        assert_eq!(
            rules,
            PricingRules {
                discount: DiscountRule {
                    rate: 0.3,
                    threshold: 50.0
                },
                tax_rate: 0.2,
            }
        );
    }
}
