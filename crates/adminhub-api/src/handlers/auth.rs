//! Sign-in, sign-out and session handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use adminhub_core::config::SessionConfig;
use adminhub_entity::session::Session;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{SessionContext, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, ApiResponse<LoginResponse>)> {
    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    let cookie = session_cookie(&state.config.session, outcome.token.token.clone());
    let body = LoginResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        user: outcome.user.into(),
    };
    Ok((jar.add(cookie), ApiResponse::ok(body)))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiResponse<MessageResponse>) {
    let removal = Cookie::build((state.config.session.cookie_name.clone(), "")).path("/");
    (
        jar.remove(removal),
        ApiResponse::ok(MessageResponse {
            message: "Signed out".to_string(),
        }),
    )
}

/// GET /api/auth/session
///
/// The raw session record; absence of a session is not an error here.
pub async fn session(ctx: SessionContext) -> Json<Session> {
    Json(ctx.session)
}

fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(parse_same_site(&config.cookie_same_site))
        .build()
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}
