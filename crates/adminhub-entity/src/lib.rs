//! # adminhub-entity
//!
//! Domain entity models for AdminHub. Database entities derive
//! `sqlx::FromRow`; the permission catalog is static data and the session
//! record is a per-request value object that is never persisted.

pub mod permission;
pub mod role;
pub mod session;
pub mod user;
