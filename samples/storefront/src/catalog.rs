//! Catalogue items and user documents.
//!
//! Both are plain JSON: an item's `price` is whatever the feed supplied
//! (possibly not a number) and a user document may lack any field. The
//! pipelines in [`crate::pricing`] and [`crate::locale`] are what make
//! sense of them.

use serde::Deserialize;
use serde_json::Value;

const SAMPLE_ITEMS: &str = r#"[
    { "name": "t-shirt", "price": 11 },
    { "name": "pants", "price": "10 dollars" },
    { "name": "chips", "price": 5 }
]"#;

const SAMPLE_USER: &str = r#"{
    "name": "joe",
    "email": "joe@example.com",
    "prefs": {
        "languages": {
            "primary": "sp",
            "secondary": "en"
        }
    }
}"#;

/// A catalogue item with an unvalidated price.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Raw price as supplied by the feed.
    #[serde(default)]
    pub price: Value,
}

impl Item {
    /// Creates an item from a name and a raw price.
    pub fn new(name: &str, price: Value) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

/// Parses a JSON array of items.
///
/// # Errors
///
/// Returns the `serde_json` error when `json` is not an array of objects
/// with a string `name`.
pub fn parse_items(json: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(json)
}

/// The three sample items: a t-shirt priced 11, pants priced
/// `"10 dollars"` and chips priced 5.
///
/// # Errors
///
/// Propagates a parse failure of the embedded data.
pub fn sample_items() -> Result<Vec<Item>, serde_json::Error> {
    parse_items(SAMPLE_ITEMS)
}

/// The sample user, whose primary language is `sp`.
///
/// # Errors
///
/// Propagates a parse failure of the embedded data.
pub fn sample_user() -> Result<Value, serde_json::Error> {
    serde_json::from_str(SAMPLE_USER)
}
