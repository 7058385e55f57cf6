//! `RequestCredentials` extractor: the session cookie and bearer token.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use adminhub_auth::Credentials;

use crate::state::AppState;

/// Credentials found on the request. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct RequestCredentials(pub Credentials);

impl FromRequestParts<AppState> for RequestCredentials {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = &state.config.session;

        let cookie = CookieJar::from_headers(&parts.headers)
            .get(&session.cookie_name)
            .map(|c| c.value().to_string());

        let bearer = if session.bearer_enabled {
            parts
                .headers
                .typed_get::<Authorization<Bearer>>()
                .map(|auth| auth.0.token().to_string())
        } else {
            None
        };

        Ok(Self(Credentials { cookie, bearer }))
    }
}
