//! Permission catalog.

pub mod catalog;
pub mod model;

pub use catalog::PermissionCatalog;
pub use model::{FeatureArea, Permission};
