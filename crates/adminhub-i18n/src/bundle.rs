//! Message bundles loaded from `<locales_dir>/<code>.json`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use adminhub_core::error::{AppError, ErrorKind};

use crate::locale::Locale;

/// The message tree of one locale. Cloning is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    root: Arc<Value>,
}

impl Messages {
    /// Wrap a parsed bundle. The root must be a JSON object.
    pub fn from_value(root: Value) -> Result<Self, AppError> {
        if !root.is_object() {
            return Err(AppError::configuration(
                "Message bundle root must be a JSON object",
            ));
        }
        Ok(Self {
            root: Arc::new(root),
        })
    }

    /// A bundle with no messages; every lookup falls back to its key.
    pub fn empty() -> Self {
        Self {
            root: Arc::new(Value::Object(serde_json::Map::new())),
        }
    }

    /// Look up a dot-separated key such as `users.form.email`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(self.root.as_ref(), |node, segment| node.get(segment))
    }

    /// The string at `key`, or the key itself when absent.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(key)
    }

    /// The whole message tree.
    pub fn as_value(&self) -> &Value {
        self.root.as_ref()
    }
}

/// Bundles for every supported locale, loaded once at startup.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    bundles: Arc<HashMap<Locale, Messages>>,
}

impl MessageCatalog {
    /// Load one bundle per supported locale from `dir`.
    ///
    /// A missing or malformed bundle is a configuration error; the server
    /// refuses to start without a complete set.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        let mut bundles = HashMap::new();

        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.code()));
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Missing message bundle: {}", path.display()),
                    e,
                )
            })?;
            let value: Value = serde_json::from_str(&raw).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Malformed message bundle: {}", path.display()),
                    e,
                )
            })?;
            bundles.insert(locale, Messages::from_value(value)?);
        }

        info!(dir = %dir.display(), locales = bundles.len(), "Loaded message bundles");
        Ok(Self {
            bundles: Arc::new(bundles),
        })
    }

    /// Build a catalog from in-memory bundles. Every locale must be present.
    pub fn from_bundles(bundles: HashMap<Locale, Messages>) -> Result<Self, AppError> {
        if let Some(missing) = Locale::ALL.iter().find(|l| !bundles.contains_key(*l)) {
            return Err(AppError::configuration(format!(
                "Missing message bundle for locale '{missing}'"
            )));
        }
        Ok(Self {
            bundles: Arc::new(bundles),
        })
    }

    /// Messages for `locale`.
    pub fn messages(&self, locale: Locale) -> Option<&Messages> {
        self.bundles.get(&locale)
    }
}
