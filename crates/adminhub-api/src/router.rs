//! Route definitions for the AdminHub HTTP API and pages.
//!
//! JSON endpoints are mounted under `/api`; page routes live at the root.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(role_routes())
        .merge(user_routes())
        .merge(permission_routes())
        .merge(i18n_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Sign-in, sign-out and session lookup
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Role administration
fn role_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/roles",
            get(handlers::admin::roles::list_roles).post(handlers::admin::roles::create_role),
        )
        .route(
            "/admin/roles/{id}",
            get(handlers::admin::roles::get_role).put(handlers::admin::roles::update_role),
        )
}

/// User administration and user images
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            get(handlers::admin::users::list_users).post(handlers::admin::users::create_user),
        )
        .route(
            "/admin/users/{id}",
            get(handlers::admin::users::get_user).put(handlers::admin::users::update_user),
        )
        .route(
            "/admin/users/{id}/image",
            get(handlers::admin::users::get_image).put(handlers::admin::users::upload_image),
        )
}

/// Permission catalog
fn permission_routes() -> Router<AppState> {
    Router::new().route("/permissions", get(handlers::permissions::list_permissions))
}

/// Message bundles and language selection
fn i18n_routes() -> Router<AppState> {
    Router::new()
        .route("/i18n/messages", get(handlers::i18n::messages))
        .route("/i18n/locale", put(handlers::i18n::set_locale))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Server-rendered pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::pages::login))
        .route("/", get(handlers::pages::dashboard))
        .route("/dashboard", get(handlers::pages::dashboard))
        .route("/users", get(handlers::pages::users_list))
        .route("/users/new", get(handlers::pages::users_new))
        .route("/users/{id}/edit", get(handlers::pages::users_edit))
        .route("/roles", get(handlers::pages::roles_list))
        .route("/roles/new", get(handlers::pages::roles_new))
        .route("/roles/{id}/edit", get(handlers::pages::roles_edit))
        .route("/profile/{id}", get(handlers::pages::profile))
}
