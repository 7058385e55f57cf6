//! User profile images.

pub mod service;

pub use service::{ImageService, StoredImage};
