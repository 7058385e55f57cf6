//! Locale handlers.

use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use adminhub_i18n::{Locale, ResolvedLocale};

use crate::dto::request::SetLocaleRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{LocaleContext, ValidatedJson};
use crate::state::AppState;

/// GET /api/i18n/messages
pub async fn messages(LocaleContext(resolved): LocaleContext) -> ApiResponse<ResolvedLocale> {
    ApiResponse::ok(resolved)
}

/// PUT /api/i18n/locale
///
/// Unlike reading the cookie, an unsupported value here is rejected.
pub async fn set_locale(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<SetLocaleRequest>,
) -> ApiResult<(CookieJar, ApiResponse<ResolvedLocale>)> {
    let locale: Locale = req.locale.parse()?;

    let cookie = Cookie::build((state.config.i18n.cookie_name.clone(), locale.code()))
        .path("/")
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), ApiResponse::ok(state.locales.resolved(locale))))
}
