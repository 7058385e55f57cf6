//! Request handlers, one module per domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod i18n;
pub mod pages;
pub mod permissions;
