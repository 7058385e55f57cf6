//! Access-guard outcomes for page routes.
//!
//! API handlers call [`SessionContext::require`] and let the denial render
//! as an envelope. Pages instead redirect unauthenticated visitors to the
//! sign-in page and answer other denials with an empty 403.
//!
//! [`SessionContext::require`]: crate::extractors::SessionContext::require

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use uuid::Uuid;

use adminhub_auth::{AccessDenied, guard};
use adminhub_entity::session::SessionUser;

use crate::error::ApiError;
use crate::extractors::RequestCredentials;
use crate::extractors::path::parse_uuid;
use crate::state::AppState;

/// Path of the sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// Response for a page whose guard denied access.
pub fn page_denied(denied: &AccessDenied) -> Response {
    match denied {
        AccessDenied::Unauthenticated { .. } => Redirect::to(LOGIN_PATH).into_response(),
        AccessDenied::UserMismatch | AccessDenied::MissingPermissions(_) => {
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// Run the access guard for a page.
pub async fn guard_page(
    state: &AppState,
    credentials: &RequestCredentials,
    required: &[&str],
    user_id: Option<Uuid>,
) -> Result<SessionUser, Response> {
    state
        .guard
        .authorize(&credentials.0, required, user_id)
        .await
        .map_err(|denied| page_denied(&denied))
}

/// Run the access guard for a page scoped to the user named by a raw path
/// segment.
///
/// The session is checked before the segment is parsed, so anonymous
/// visitors are redirected even when the id is malformed.
pub async fn guard_own_page(
    state: &AppState,
    credentials: &RequestCredentials,
    raw_user_id: &str,
) -> Result<SessionUser, Response> {
    let session = state.guard.resolver().resolve(&credentials.0).await;
    guard::check(&session, &[], None).map_err(|denied| page_denied(&denied))?;

    let user_id = parse_uuid(raw_user_id).map_err(|e| ApiError(e).into_response())?;
    guard::check(&session, &[], Some(user_id))
        .cloned()
        .map_err(|denied| page_denied(&denied))
}
