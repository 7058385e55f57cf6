//! Router-level integration tests against the in-memory store.

mod access_test;
mod auth_test;
mod helpers;
mod locale_test;
mod pages_test;
mod roles_test;
mod users_test;
