//! Access guard: the allow/deny decision for a route.
//!
//! [`evaluate`] is the pure decision over an already resolved session.
//! [`AccessGuard::authorize`] resolves the session first.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_entity::session::{Session, SessionUser, STATUS_UNAUTHENTICATED};

use crate::session::{Credentials, SessionResolver};

/// Why access was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// No session, or a session whose status is not 200.
    Unauthenticated {
        /// Status reported by session resolution.
        status: u16,
    },
    /// The route targets a different user than the session's.
    UserMismatch,
    /// Required permissions the session does not hold.
    MissingPermissions(Vec<String>),
}

impl AccessDenied {
    /// HTTP status for API responses.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated { .. } => 401,
            Self::UserMismatch | Self::MissingPermissions(_) => 403,
        }
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated { status } => {
                write!(f, "Authentication required (session status {status})")
            }
            Self::UserMismatch => write!(f, "Access to another user's resource is not allowed"),
            Self::MissingPermissions(missing) => {
                write!(f, "Missing permissions: {}", missing.join(", "))
            }
        }
    }
}

impl From<AccessDenied> for AppError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Unauthenticated { .. } => AppError::unauthorized(denied.to_string()),
            _ => AppError::forbidden(denied.to_string()),
        }
    }
}

/// Decide whether `session` may proceed.
///
/// Rules, in order: no session or non-200 status denies; a supplied
/// `user_id` different from the session user's denies; any required
/// permission not granted denies. Membership is exact; there are no
/// wildcards or hierarchies.
pub fn evaluate<'a>(
    session: Option<&'a Session>,
    required: &[&str],
    user_id: Option<Uuid>,
) -> Result<&'a SessionUser, AccessDenied> {
    let Some(session) = session else {
        return Err(AccessDenied::Unauthenticated {
            status: STATUS_UNAUTHENTICATED,
        });
    };
    let Some(user) = session.user() else {
        return Err(AccessDenied::Unauthenticated {
            status: session.status,
        });
    };

    if let Some(expected) = user_id {
        if expected != user.id {
            return Err(AccessDenied::UserMismatch);
        }
    }

    let missing = user.missing_permissions(required);
    if !missing.is_empty() {
        return Err(AccessDenied::MissingPermissions(missing));
    }

    Ok(user)
}

/// Resolves a session and applies [`evaluate`].
#[derive(Debug, Clone)]
pub struct AccessGuard {
    resolver: Arc<SessionResolver>,
}

impl AccessGuard {
    /// Create a guard over a resolver.
    pub fn new(resolver: Arc<SessionResolver>) -> Self {
        Self { resolver }
    }

    /// The underlying session resolver.
    pub fn resolver(&self) -> &SessionResolver {
        &self.resolver
    }

    /// Resolve the session for `credentials` and decide.
    pub async fn authorize(
        &self,
        credentials: &Credentials,
        required: &[&str],
        user_id: Option<Uuid>,
    ) -> Result<SessionUser, AccessDenied> {
        let session = self.resolver.resolve(credentials).await;
        check(&session, required, user_id).cloned()
    }
}

/// [`evaluate`] over a resolved session, with a debug log of the outcome.
pub fn check<'a>(
    session: &'a Session,
    required: &[&str],
    user_id: Option<Uuid>,
) -> Result<&'a SessionUser, AccessDenied> {
    let outcome = evaluate(Some(session), required, user_id);
    match &outcome {
        Ok(user) => debug!(user_id = %user.id, ?required, "Access granted"),
        Err(denied) => debug!(status = session.status, ?required, reason = %denied, "Access denied"),
    }
    outcome
}
