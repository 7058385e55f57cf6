//! Per-request locale selection.

use serde::Serialize;

use crate::bundle::{MessageCatalog, Messages};
use crate::locale::{Direction, Locale};

/// Locale chosen for a request together with its messages.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLocale {
    /// Selected locale.
    pub locale: Locale,
    /// Text direction of the locale.
    pub direction: Direction,
    /// Messages for the locale.
    #[serde(serialize_with = "serialize_messages")]
    pub messages: Messages,
}

fn serialize_messages<S: serde::Serializer>(messages: &Messages, s: S) -> Result<S::Ok, S::Error> {
    messages.as_value().serialize(s)
}

/// Picks a locale from the language cookie.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    catalog: MessageCatalog,
}

impl LocaleResolver {
    /// Create a resolver over a loaded catalog.
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    /// Select the locale named by `cookie`.
    ///
    /// The value must match a locale code exactly; an absent or unsupported
    /// value silently selects English.
    pub fn resolve(&self, cookie: Option<&str>) -> ResolvedLocale {
        let locale = cookie
            .and_then(|value| value.parse::<Locale>().ok())
            .unwrap_or_default();
        self.resolved(locale)
    }

    /// Messages and direction for a known locale.
    pub fn resolved(&self, locale: Locale) -> ResolvedLocale {
        let messages = self
            .catalog
            .messages(locale)
            .cloned()
            .unwrap_or_else(Messages::empty);
        ResolvedLocale {
            locale,
            direction: locale.direction(),
            messages,
        }
    }
}
