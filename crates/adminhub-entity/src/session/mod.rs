//! Resolved session records.

pub mod model;

pub use model::{
    STATUS_FORBIDDEN, STATUS_OK, STATUS_UNAUTHENTICATED, STATUS_UNAVAILABLE, Session, SessionData,
    SessionUser,
};
