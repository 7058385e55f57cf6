//! # adminhub-api
//!
//! HTTP layer for AdminHub built on Axum.
//!
//! Provides the JSON endpoints, the server-rendered page shells, request
//! extractors for session and locale, the access-guard helpers, and the
//! mapping of `AppError` into the response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
