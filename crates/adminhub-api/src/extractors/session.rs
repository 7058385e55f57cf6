//! `SessionContext` extractor: the resolved session of the request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use adminhub_auth::guard;
use adminhub_entity::session::Session;
use adminhub_service::context::RequestContext;

use super::credentials::RequestCredentials;
use crate::error::ApiResult;
use crate::state::AppState;

/// The session resolved for this request.
///
/// Extraction never fails; handlers decide what a missing session means by
/// calling [`SessionContext::require`].
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// The resolved session record.
    pub session: Session,
}

impl SessionContext {
    /// Apply the access guard and return the acting user's context.
    pub fn require(&self, required: &[&str]) -> ApiResult<RequestContext> {
        self.require_user(required, None)
    }

    /// Like [`require`](Self::require), also requiring the session user to be `user_id`.
    pub fn require_user(
        &self,
        required: &[&str],
        user_id: Option<Uuid>,
    ) -> ApiResult<RequestContext> {
        let user = guard::check(&self.session, required, user_id)?;
        Ok(RequestContext::from_session_user(user))
    }
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequestCredentials(credentials) =
            RequestCredentials::from_request_parts(parts, state).await?;
        let session = state.guard.resolver().resolve(&credentials).await;
        Ok(Self { session })
    }
}
