//! Administration endpoints under `/api/admin`.

pub mod roles;
pub mod users;
