//! Sign-in.

pub mod service;

pub use service::{AuthService, LoginOutcome};
