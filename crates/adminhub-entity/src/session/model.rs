//! Session record returned by session resolution.
//!
//! Resolution never fails; the outcome is carried in the HTTP-style
//! `status` field. Only a `200` session carries user data.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a valid session for an active user.
pub const STATUS_OK: u16 = 200;
/// Status when no valid session accompanies the request.
pub const STATUS_UNAUTHENTICATED: u16 = 401;
/// Status when the session's user is not active.
pub const STATUS_FORBIDDEN: u16 = 403;
/// Status when the backing store could not be reached.
pub const STATUS_UNAVAILABLE: u16 = 503;

/// The outcome of resolving a request's credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// HTTP-style resolution status.
    pub status: u16,
    /// Present only when `status` is 200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SessionData>,
}

/// Payload of a successful session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// The signed-in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

/// The authenticated principal of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Assigned role.
    pub role_id: Option<Uuid>,
    /// Granted permissions, always a subset of the catalog.
    pub permissions: BTreeSet<String>,
    /// Token identifier of this session.
    pub session_id: Uuid,
    /// When the session's token expires.
    pub expires_at: DateTime<Utc>,
}

impl SessionUser {
    /// Whether the user holds `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Required permissions the user does not hold, in input order.
    pub fn missing_permissions(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|p| !self.has_permission(p))
            .map(|p| p.to_string())
            .collect()
    }
}

impl Session {
    /// A valid session for an active user.
    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            status: STATUS_OK,
            data: Some(SessionData { user: Some(user) }),
        }
    }

    /// A session without user data carrying the given status.
    pub fn anonymous(status: u16) -> Self {
        Self { status, data: None }
    }

    /// No valid credentials.
    pub fn unauthenticated() -> Self {
        Self::anonymous(STATUS_UNAUTHENTICATED)
    }

    /// Valid credentials for an inactive user.
    pub fn forbidden() -> Self {
        Self::anonymous(STATUS_FORBIDDEN)
    }

    /// The store could not be consulted.
    pub fn unavailable() -> Self {
        Self::anonymous(STATUS_UNAVAILABLE)
    }

    /// Whether the status is 200.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The signed-in user of a 200 session.
    pub fn user(&self) -> Option<&SessionUser> {
        if !self.is_ok() {
            return None;
        }
        self.data.as_ref().and_then(|d| d.user.as_ref())
    }
}
