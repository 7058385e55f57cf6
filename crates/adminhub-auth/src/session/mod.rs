//! Session resolution.

pub mod credentials;
pub mod resolver;

pub use credentials::Credentials;
pub use resolver::SessionResolver;
