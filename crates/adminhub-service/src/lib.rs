//! # adminhub-service
//!
//! Business logic between the HTTP handlers and the stores. Access control
//! happens before a service is called; services validate domain rules and
//! forward to the store.

pub mod auth;
pub mod context;
pub mod image;
pub mod role;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use self::image::ImageService;
pub use role::RoleService;
pub use user::UserService;
