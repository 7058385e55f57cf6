//! # adminhub-i18n
//!
//! Supported locales, their message bundles, and per-request locale
//! resolution from the language cookie.

pub mod bundle;
pub mod locale;
pub mod resolver;

pub use bundle::{MessageCatalog, Messages};
pub use locale::{Direction, Locale};
pub use resolver::{LocaleResolver, ResolvedLocale};
