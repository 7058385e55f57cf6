//! # adminhub-core
//!
//! Core crate for AdminHub. Contains configuration schemas, the unified
//! error system, the response envelope, pagination types, and the storage
//! provider trait.
//!
//! This crate has **no** internal dependencies on other AdminHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
