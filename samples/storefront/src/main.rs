//! Storefront sample binary.
//!
//! Resolves the sample user's index page and prices the sample catalogue.
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=storefront=debug cargo run -p storefront
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_TAX_RATE`: Tax rate in `[0, 1]` (default: 0.25)
//! - `STORE_DISCOUNT_RATE`: Discount rate in `[0, 1]` (default: 0.10)
//! - `STORE_DISCOUNT_THRESHOLD`: Lowest discountable price (default: 10)
//! - `STORE_DEFAULT_INDEX_URL`: Fallback index page (default: `http://site.com/en`)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::catalog::{sample_items, sample_user};
use storefront::config::StoreConfig;
use storefront::error::StorefrontError;
use storefront::locale::{LocaleTable, resolve_index_url};
use storefront::pricing::{PricingRules, TracingReporter, show_total_price};

fn main() -> Result<(), StorefrontError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env()?;
    tracing::info!(
        tax_rate = config.tax_rate,
        discount_rate = config.discount_rate,
        discount_threshold = config.discount_threshold,
        "Configuration loaded"
    );

    let user = sample_user()?;
    let index_url = resolve_index_url(
        &LocaleTable::standard(),
        Some(&user),
        &config.default_index_url,
    );
    tracing::info!("Index page: {}", index_url);

    let rules = PricingRules::from(&config);
    let reporter = TracingReporter;
    for item in sample_items()? {
        show_total_price(&reporter, &rules, &item);
    }

    Ok(())
}
