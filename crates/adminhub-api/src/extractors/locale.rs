//! `LocaleContext` extractor: the locale chosen by the language cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use adminhub_i18n::ResolvedLocale;

use crate::state::AppState;

/// Locale and messages for this request. Never rejects.
#[derive(Debug, Clone)]
pub struct LocaleContext(pub ResolvedLocale);

impl std::ops::Deref for LocaleContext {
    type Target = ResolvedLocale;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for LocaleContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(&state.config.i18n.cookie_name).map(|c| c.value());
        Ok(Self(state.locales.resolve(cookie)))
    }
}
