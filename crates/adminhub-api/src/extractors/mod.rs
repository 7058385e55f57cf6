//! Custom Axum extractors.

pub mod credentials;
pub mod json;
pub mod locale;
pub mod pagination;
pub mod path;
pub mod session;

pub use credentials::RequestCredentials;
pub use json::ValidatedJson;
pub use locale::LocaleContext;
pub use pagination::PaginationParams;
pub use session::SessionContext;
