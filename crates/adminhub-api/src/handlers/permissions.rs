//! Permission catalog handler.

use adminhub_entity::permission::PermissionCatalog;

use crate::dto::response::{ApiResponse, PermissionGroupResponse};
use crate::error::ApiResult;
use crate::extractors::SessionContext;

/// GET /api/permissions
pub async fn list_permissions(
    session: SessionContext,
) -> ApiResult<ApiResponse<Vec<PermissionGroupResponse>>> {
    session.require(&[])?;
    Ok(ApiResponse::ok(grouped()))
}

/// The catalog grouped by feature area.
pub fn grouped() -> Vec<PermissionGroupResponse> {
    PermissionCatalog::grouped()
        .into_iter()
        .map(|(group, permissions)| PermissionGroupResponse { group, permissions })
        .collect()
}
