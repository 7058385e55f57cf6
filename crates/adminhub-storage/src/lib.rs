//! # adminhub-storage
//!
//! Storage backends for uploaded files and validation of user images.

pub mod image;
pub mod providers;

pub use self::image::{ImageInfo, ImageValidator};
pub use providers::local::LocalStorageProvider;
