//! User account management.

pub mod service;

pub use service::{CreateUserInput, UpdateUserInput, UserService};
