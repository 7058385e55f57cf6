//! PostgreSQL repositories.

pub mod role;
pub mod user;

pub use role::RoleRepository;
pub use user::UserRepository;
