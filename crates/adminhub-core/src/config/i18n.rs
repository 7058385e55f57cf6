//! Locale configuration.

use serde::{Deserialize, Serialize};

/// Where message bundles live and which cookie selects the locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Directory containing `<locale>.json` bundles.
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    /// Name of the language cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_locales_dir() -> String {
    "./locales".to_string()
}

fn default_cookie_name() -> String {
    "adminhub_locale".to_string()
}
