//! User management and user image handlers.
//!
//! Query strings and bodies are extracted as `Result`s so the access guard
//! decides before any payload error is reported.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use adminhub_core::error::AppError;
use adminhub_core::types::pagination::PageResponse;
use adminhub_entity::permission::catalog::{
    FILES_UPLOAD, FILES_VIEW, USERS_CREATE, USERS_UPDATE, USERS_VIEW,
};
use adminhub_service::user::{CreateUserInput, UpdateUserInput};

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::{ApiError, ApiResult};
use crate::extractors::path::parse_uuid;
use crate::extractors::{PaginationParams, SessionContext, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    session: SessionContext,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> ApiResult<ApiResponse<PageResponse<UserResponse>>> {
    session.require(&[USERS_VIEW])?;
    let Query(params) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let page = state
        .user_service
        .list_users(&params.into_page_request())
        .await?;
    Ok(ApiResponse::ok(page.map(UserResponse::from)))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    session: SessionContext,
    body: Result<ValidatedJson<CreateUserRequest>, ApiError>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let ctx = session.require(&[USERS_CREATE])?;
    let ValidatedJson(req) = body?;
    let user = state
        .user_service
        .create_user(
            &ctx,
            CreateUserInput {
                name: req.name,
                email: req.email,
                password: req.password,
                role_id: req.role_id,
            },
        )
        .await?;
    Ok(ApiResponse::created(user.into()))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<UserResponse>> {
    session.require(&[USERS_VIEW])?;
    let user = state.user_service.get_user(parse_uuid(&id)?).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UpdateUserRequest>, ApiError>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let ctx = session.require(&[USERS_UPDATE])?;
    let ValidatedJson(req) = body?;
    let user = state
        .user_service
        .update_user(
            &ctx,
            parse_uuid(&id)?,
            UpdateUserInput {
                name: req.name,
                email: req.email,
                role_id: req.role_id,
                status: req.status,
            },
        )
        .await?;
    Ok(ApiResponse::ok(user.into()))
}

/// PUT /api/admin/users/{id}/image
///
/// Multipart body with the image in the `file` field.
pub async fn upload_image(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<ApiResponse<UserResponse>> {
    session.require(&[FILES_UPLOAD])?;
    let user_id = parse_uuid(&id)?;
    let mut multipart =
        multipart.map_err(|e| AppError::validation(format!("Multipart error: {}", e.body_text())))?;

    let mut data: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let data = data.ok_or_else(|| AppError::validation("Missing 'file' field"))?;
    let user = state.image_service.upload(user_id, data).await?;
    Ok(ApiResponse::ok(user.into()))
}

/// GET /api/admin/users/{id}/image
///
/// Raw image bytes on success; errors use the envelope.
pub async fn get_image(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    session.require(&[FILES_VIEW])?;
    let image = state.image_service.read(parse_uuid(&id)?).await?;
    Ok((
        [
            (header::CONTENT_TYPE, image.content_type),
            (header::CACHE_CONTROL, "private, no-cache".to_string()),
        ],
        image.data,
    )
        .into_response())
}
