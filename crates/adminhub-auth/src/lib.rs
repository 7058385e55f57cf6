//! # adminhub-auth
//!
//! Authentication and authorization for AdminHub:
//!
//! - [`jwt`]: signed session tokens
//! - [`password`]: Argon2id hashing
//! - [`session`]: turning request credentials into a [`Session`] record
//! - [`guard`]: the allow/deny decision over a session
//!
//! [`Session`]: adminhub_entity::session::Session

pub mod guard;
pub mod jwt;
pub mod password;
pub mod session;

pub use guard::{AccessDenied, AccessGuard};
pub use session::{Credentials, SessionResolver};
