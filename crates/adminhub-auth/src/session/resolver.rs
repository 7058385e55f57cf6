//! Turns request credentials into a [`Session`] record.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use adminhub_database::store::{RoleStore, UserStore};
use adminhub_entity::session::{Session, SessionUser};

use super::credentials::Credentials;
use crate::jwt::JwtDecoder;

/// Resolves the session of a request.
///
/// Resolution never fails: a missing or bad token yields `401`, an inactive
/// user `403`, and a store failure `503`. Only `200` carries user data.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    decoder: JwtDecoder,
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
}

impl SessionResolver {
    /// Create a resolver over the given stores.
    pub fn new(decoder: JwtDecoder, users: Arc<dyn UserStore>, roles: Arc<dyn RoleStore>) -> Self {
        Self {
            decoder,
            users,
            roles,
        }
    }

    /// Resolve the session for `credentials`.
    pub async fn resolve(&self, credentials: &Credentials) -> Session {
        let Some(token) = credentials.token() else {
            return Session::unauthenticated();
        };

        let claims = match self.decoder.decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(reason = %e.message, "Rejected session token");
                return Session::unauthenticated();
            }
        };

        let user = match self.users.find_by_id(claims.user_id()).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(user_id = %claims.sub, "Session subject no longer exists");
                return Session::unauthenticated();
            }
            Err(e) => {
                warn!(user_id = %claims.sub, error = %e, "Failed to load session user");
                return Session::unavailable();
            }
        };

        if !user.status.is_active() {
            debug!(user_id = %user.id, status = %user.status, "Session user is not active");
            return Session::forbidden();
        }

        let permissions = match user.role_id {
            None => BTreeSet::new(),
            Some(role_id) => match self.roles.find_by_id(role_id).await {
                Ok(Some(role)) => role.effective_permissions(),
                Ok(None) => BTreeSet::new(),
                Err(e) => {
                    warn!(%role_id, error = %e, "Failed to load session role");
                    return Session::unavailable();
                }
            },
        };

        Session::authenticated(SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role_id: user.role_id,
            permissions,
            session_id: claims.sid,
            expires_at: claims.expires_at(),
        })
    }
}
