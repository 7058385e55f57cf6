//! Core traits defined in `adminhub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
