//! Request context carrying the authenticated user.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adminhub_entity::session::SessionUser;

/// Who is acting in the current request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// Permissions granted for this request.
    pub permissions: BTreeSet<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Build a context from a verified session user.
    pub fn from_session_user(user: &SessionUser) -> Self {
        Self {
            user_id: user.id,
            session_id: user.session_id,
            permissions: user.permissions.clone(),
            request_time: Utc::now(),
        }
    }

    /// Whether the acting user holds `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
