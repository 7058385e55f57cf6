//! Core type definitions used across the AdminHub workspace.

pub mod pagination;
pub mod response;

pub use pagination::{PageRequest, PageResponse};
pub use response::{Envelope, ErrorBody};
