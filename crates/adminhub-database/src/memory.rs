//! In-memory implementation of the store traits.
//!
//! Backs the test suite and `database.provider = "memory"`. Enforces the
//! same uniqueness and reference rules as the PostgreSQL schema.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_entity::role::{CreateRole, Role, UpdateRole};
use adminhub_entity::user::{CreateUser, UpdateUser, User, UserStatus};

use crate::store::{RoleStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    /// Insertion order; listing reverses it.
    users: Vec<User>,
    roles: Vec<Role>,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .iter()
            .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }

    fn role_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.roles
            .iter()
            .any(|r| Some(r.id) != except && r.name == name)
    }

    fn ensure_role(&self, role_id: Option<Uuid>) -> AppResult<()> {
        match role_id {
            Some(id) if !self.roles.iter().any(|r| r.id == id) => {
                Err(AppError::validation("Role does not exist"))
            }
            _ => Ok(()),
        }
    }
}

/// Process-local store guarded by a single `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let tables = self.tables.read().await;
        let total = tables.users.len() as u64;
        let items = tables
            .users
            .iter()
            .rev()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&data.email, None) {
            return Err(AppError::conflict("Email already in use"));
        }
        tables.ensure_role(data.role_id)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            email: data.email.to_lowercase(),
            password_hash: data.password_hash.clone(),
            role_id: data.role_id,
            status: UserStatus::Active,
            image_key: None,
            image_content_type: None,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if let Some(email) = &data.email {
            if tables.email_taken(email, Some(id)) {
                return Err(AppError::conflict("Email already in use"));
            }
        }
        tables.ensure_role(data.role_id)?;

        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        if let Some(name) = &data.name {
            user.name = name.clone();
        }
        if let Some(email) = &data.email {
            user.email = email.to_lowercase();
        }
        if let Some(role_id) = data.role_id {
            user.role_id = Some(role_id);
        }
        if let Some(status) = data.status {
            user.status = status;
        }
        if let Some(hash) = &data.password_hash {
            user.password_hash = hash.clone();
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn set_image(&self, id: Uuid, key: &str, content_type: &str) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.image_key = Some(key.to_string());
        user.image_content_type = Some(content_type.to_string());
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Role>> {
        let tables = self.tables.read().await;
        let mut roles = tables.roles.clone();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        let tables = self.tables.read().await;
        Ok(tables.roles.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let tables = self.tables.read().await;
        Ok(tables.roles.iter().find(|r| r.name == name).cloned())
    }

    async fn create(&self, data: &CreateRole) -> AppResult<Role> {
        let mut tables = self.tables.write().await;
        if tables.role_name_taken(&data.name, None) {
            return Err(AppError::conflict(format!(
                "Role '{}' already exists",
                data.name
            )));
        }

        let now = Utc::now();
        let role = Role {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            permissions: data.permissions.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.roles.push(role.clone());
        Ok(role)
    }

    async fn update(&self, id: Uuid, data: &UpdateRole) -> AppResult<Role> {
        let mut tables = self.tables.write().await;
        if let Some(name) = &data.name {
            if tables.role_name_taken(name, Some(id)) {
                return Err(AppError::conflict(format!("Role '{name}' already exists")));
            }
        }

        let role = tables
            .roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))?;
        if let Some(name) = &data.name {
            role.name = name.clone();
        }
        if let Some(permissions) = &data.permissions {
            role.permissions = permissions.clone();
        }
        role.updated_at = Utc::now();
        Ok(role.clone())
    }
}
