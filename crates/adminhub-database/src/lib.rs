//! # adminhub-database
//!
//! Persistence for users and roles. Callers depend on the [`UserStore`] and
//! [`RoleStore`] traits; PostgreSQL repositories back production and
//! [`MemoryStore`] backs tests and `database.provider = "memory"`.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{RoleStore, Stores, UserStore};
