//! Localized index-page lookup.
//!
//! A user document may be missing, may lack a primary language, and the
//! language may have no translated page. Each of those cases is an
//! `Optional::Absent` somewhere in the chain; the caller resolves them all
//! at once with a default URL.
//!
//! The URL table is passed in explicitly and bound once with
//! [`curry2!`](mapchain::curry2), yielding a one-argument step for
//! `Optional::chain`.

use std::collections::HashMap;
use std::sync::Arc;

use mapchain::control::Optional;
use mapchain::curry2;
use serde_json::Value;

const PRIMARY_LANGUAGE_PATH: &str = "/prefs/languages/primary";

/// Index page URL per language code.
///
/// Cloning is cheap: the table is shared behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleTable {
    urls: Arc<HashMap<String, String>>,
}

impl LocaleTable {
    /// Builds a table from `(language, url)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            urls: Arc::new(
                entries
                    .into_iter()
                    .map(|(language, url)| (language.into(), url.into()))
                    .collect(),
            ),
        }
    }

    /// The English, Spanish and Japanese index pages.
    pub fn standard() -> Self {
        Self::new([
            ("en", "http://mysite.com/en"),
            ("sp", "http://mysite.com/sp"),
            ("jp", "http://mysite.com/jp"),
        ])
    }

    /// Returns the URL for `language`, if there is one.
    pub fn url_for(&self, language: &str) -> Option<&str> {
        self.urls.get(language).map(String::as_str)
    }
}

/// Looks up `language` in `table`.
pub fn lookup_url(table: LocaleTable, language: String) -> Optional<String> {
    Optional::from(table.url_for(&language).map(str::to_string))
}

/// Reads `prefs.languages.primary` from a user document.
pub fn primary_language(user: &Value) -> Option<String> {
    user.pointer(PRIMARY_LANGUAGE_PATH)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Resolves the localized index page for `user`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storefront::locale::{LocaleTable, index_url_for_user};
///
/// let user = json!({ "prefs": { "languages": { "primary": "jp" } } });
/// let url = index_url_for_user(&LocaleTable::standard(), Some(&user));
/// assert_eq!(url.get_or_else("http://site.com/en".to_string()), "http://mysite.com/jp");
/// ```
pub fn index_url_for_user(table: &LocaleTable, user: Option<&Value>) -> Optional<String> {
    let maybe_get_url = curry2!(lookup_url)(table.clone());

    Optional::from(user)
        .map_nullable(primary_language)
        .chain(maybe_get_url)
}

/// Resolves the index page for `user`, falling back to `default_url`.
#[tracing::instrument(level = "debug", skip(table, user), fields(has_user = user.is_some()))]
pub fn resolve_index_url(table: &LocaleTable, user: Option<&Value>, default_url: &str) -> String {
    let url = index_url_for_user(table, user).get_or_else_with(|| {
        tracing::debug!("no localized index page, using default");
        default_url.to_string()
    });
    tracing::debug!(%url, "resolved index page");
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("en", Some("http://mysite.com/en"))]
    #[case("fr", None)]
    fn test_url_for(#[case] language: &str, #[case] expected: Option<&str>) {
        assert_eq!(LocaleTable::standard().url_for(language), expected);
    }

    #[rstest]
    fn test_lookup_url_absent_for_unknown_language() {
        assert!(lookup_url(LocaleTable::standard(), "de".to_string()).is_absent());
    }

    #[rstest]
    fn test_primary_language_reads_path() {
        let user = json!({ "prefs": { "languages": { "primary": "sp" } } });
        assert_eq!(primary_language(&user), Some("sp".to_string()));
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "prefs": null }))]
    #[case(json!({ "prefs": { "languages": { "primary": 3 } } }))]
    fn test_primary_language_missing(#[case] user: Value) {
        assert_eq!(primary_language(&user), None);
    }

    #[rstest]
    fn test_resolve_index_url_defaults_for_missing_user() {
        let url = resolve_index_url(&LocaleTable::standard(), None, "http://site.com/en");
        assert_eq!(url, "http://site.com/en");
    }

    #[rstest]
    fn test_custom_table() {
        let table = LocaleTable::new([("de".to_string(), "http://mysite.com/de".to_string())]);
        let user = json!({ "prefs": { "languages": { "primary": "de" } } });
        assert_eq!(
            index_url_for_user(&table, Some(&user)),
            Optional::Present("http://mysite.com/de".to_string())
        );
    }
}
