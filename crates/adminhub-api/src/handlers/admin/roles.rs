//! Role management handlers.
//!
//! Bodies are extracted as `Result`s so the access guard decides before
//! any payload error is reported.

use axum::extract::{Path, State};

use adminhub_entity::permission::catalog::{ROLES_CREATE, ROLES_UPDATE, ROLES_VIEW};
use adminhub_entity::role::Role;

use crate::dto::request::{CreateRoleRequest, UpdateRoleRequest};
use crate::dto::response::ApiResponse;
use crate::error::{ApiError, ApiResult};
use crate::extractors::path::parse_uuid;
use crate::extractors::{SessionContext, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/roles
pub async fn list_roles(
    State(state): State<AppState>,
    session: SessionContext,
) -> ApiResult<ApiResponse<Vec<Role>>> {
    session.require(&[ROLES_VIEW])?;
    let roles = state.role_service.list_roles().await?;
    Ok(ApiResponse::ok(roles))
}

/// POST /api/admin/roles
pub async fn create_role(
    State(state): State<AppState>,
    session: SessionContext,
    body: Result<ValidatedJson<CreateRoleRequest>, ApiError>,
) -> ApiResult<ApiResponse<Role>> {
    let ctx = session.require(&[ROLES_CREATE])?;
    let ValidatedJson(req) = body?;
    let role = state
        .role_service
        .create_role(&ctx, &req.name, &req.permissions)
        .await?;
    Ok(ApiResponse::created(role))
}

/// GET /api/admin/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Role>> {
    session.require(&[ROLES_VIEW])?;
    let role = state.role_service.get_role(parse_uuid(&id)?).await?;
    Ok(ApiResponse::ok(role))
}

/// PUT /api/admin/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UpdateRoleRequest>, ApiError>,
) -> ApiResult<ApiResponse<Role>> {
    let ctx = session.require(&[ROLES_UPDATE])?;
    let ValidatedJson(req) = body?;
    let role = state
        .role_service
        .update_role(
            &ctx,
            parse_uuid(&id)?,
            req.name.as_deref(),
            req.permissions.as_deref(),
        )
        .await?;
    Ok(ApiResponse::ok(role))
}
