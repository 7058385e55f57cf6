//! Axum middleware stack.

pub mod access;
pub mod compression;
pub mod cors;
pub mod logging;
