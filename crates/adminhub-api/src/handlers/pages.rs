//! Server-rendered page routes.
//!
//! Each page runs the access guard, loads what the client needs for its
//! first paint, and returns the HTML shell with that data embedded.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::{Value, json};

use adminhub_core::error::AppError;
use adminhub_core::types::pagination::PageRequest;
use adminhub_entity::permission::catalog::{
    DASHBOARD_VIEW, ROLES_UPDATE, ROLES_VIEW, USERS_CREATE, USERS_UPDATE, USERS_VIEW,
};
use adminhub_entity::session::SessionUser;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_uuid;
use crate::extractors::{LocaleContext, RequestCredentials, SessionContext};
use crate::handlers::permissions::grouped;
use crate::middleware::access::{guard_own_page, guard_page};
use crate::render::{PageState, page_shell};
use crate::state::AppState;

type PageResult = Result<Html<String>, Response>;

fn render(
    page: &str,
    title_key: &str,
    user: Option<&SessionUser>,
    locale: &LocaleContext,
    data: Value,
) -> Html<String> {
    let state = PageState {
        page,
        user,
        locale: &locale.0,
        data,
    };
    page_shell(title_key, &state)
}

fn failed(err: AppError) -> Response {
    ApiError(err).into_response()
}

/// GET /login
///
/// Visitors who already hold a valid session go straight to the dashboard.
pub async fn login(session: SessionContext, locale: LocaleContext) -> Response {
    if session.session.is_ok() {
        return Redirect::to("/").into_response();
    }
    render("login", "pages.login.title", None, &locale, json!({})).into_response()
}

/// GET / and GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[DASHBOARD_VIEW], None).await?;
    let data = json!({ "permissions": user.permissions });
    Ok(render(
        "dashboard",
        "pages.dashboard.title",
        Some(&user),
        &locale,
        data,
    ))
}

/// GET /users
pub async fn users_list(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[USERS_VIEW], None).await?;
    let users = state
        .user_service
        .list_users(&PageRequest::default())
        .await
        .map_err(failed)?
        .map(UserResponse::from);
    Ok(render(
        "users.list",
        "pages.users.title",
        Some(&user),
        &locale,
        json!({ "users": users }),
    ))
}

/// GET /users/new
pub async fn users_new(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[USERS_CREATE], None).await?;
    let roles = state.role_service.list_roles().await.map_err(failed)?;
    Ok(render(
        "users.new",
        "pages.users_new.title",
        Some(&user),
        &locale,
        json!({ "roles": roles }),
    ))
}

/// GET /users/{id}/edit
pub async fn users_edit(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
    Path(id): Path<String>,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[USERS_UPDATE], None).await?;
    let id = parse_uuid(&id).map_err(failed)?;
    let target = state.user_service.get_user(id).await.map_err(failed)?;
    let roles = state.role_service.list_roles().await.map_err(failed)?;
    Ok(render(
        "users.edit",
        "pages.users_edit.title",
        Some(&user),
        &locale,
        json!({ "user": UserResponse::from(target), "roles": roles }),
    ))
}

/// GET /roles
pub async fn roles_list(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[ROLES_VIEW], None).await?;
    let roles = state.role_service.list_roles().await.map_err(failed)?;
    Ok(render(
        "roles.list",
        "pages.roles.title",
        Some(&user),
        &locale,
        json!({ "roles": roles }),
    ))
}

/// GET /roles/new
pub async fn roles_new(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[ROLES_UPDATE], None).await?;
    Ok(render(
        "roles.new",
        "pages.roles_new.title",
        Some(&user),
        &locale,
        json!({ "permissions": grouped() }),
    ))
}

/// GET /roles/{id}/edit
pub async fn roles_edit(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
    Path(id): Path<String>,
) -> PageResult {
    let user = guard_page(&state, &credentials, &[ROLES_UPDATE], None).await?;
    let id = parse_uuid(&id).map_err(failed)?;
    let role = state.role_service.get_role(id).await.map_err(failed)?;
    Ok(render(
        "roles.edit",
        "pages.roles_edit.title",
        Some(&user),
        &locale,
        json!({ "role": role, "permissions": grouped() }),
    ))
}

/// GET /profile/{id}
///
/// Only the user themselves may open their profile.
pub async fn profile(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    locale: LocaleContext,
    Path(id): Path<String>,
) -> PageResult {
    let user = guard_own_page(&state, &credentials, &id).await?;
    let profile = state.user_service.get_user(user.id).await.map_err(failed)?;
    Ok(render(
        "profile",
        "pages.profile.title",
        Some(&user),
        &locale,
        json!({ "user": UserResponse::from(profile) }),
    ))
}
