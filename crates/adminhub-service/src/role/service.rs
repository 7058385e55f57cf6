//! Role CRUD with permission validation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_database::store::RoleStore;
use adminhub_entity::permission::PermissionCatalog;
use adminhub_entity::role::{CreateRole, Role, UpdateRole};

use crate::context::RequestContext;

/// Handles role listing, creation and updates.
#[derive(Debug, Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleStore>,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// All roles ordered by name.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.roles.list().await
    }

    /// A single role.
    pub async fn get_role(&self, id: Uuid) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))
    }

    /// Create a role. Permissions are checked against the catalog,
    /// deduplicated and sorted.
    pub async fn create_role(
        &self,
        ctx: &RequestContext,
        name: &str,
        permissions: &[String],
    ) -> AppResult<Role> {
        let data = CreateRole {
            name: normalize_name(name)?,
            permissions: PermissionCatalog::normalize(permissions)?,
        };

        let role = self.roles.create(&data).await?;
        info!(
            actor = %ctx.user_id,
            role_id = %role.id,
            name = %role.name,
            permissions = role.permissions.len(),
            "Role created"
        );
        Ok(role)
    }

    /// Update a role's name and/or permissions.
    pub async fn update_role(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        name: Option<&str>,
        permissions: Option<&[String]>,
    ) -> AppResult<Role> {
        let data = UpdateRole {
            name: name.map(normalize_name).transpose()?,
            permissions: permissions.map(PermissionCatalog::normalize).transpose()?,
        };

        let role = self.roles.update(id, &data).await?;
        info!(actor = %ctx.user_id, role_id = %role.id, "Role updated");
        Ok(role)
    }
}

fn normalize_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Role name must not be empty"));
    }
    Ok(name.to_string())
}
