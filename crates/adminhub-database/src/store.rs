//! Store contracts consumed by the service layer.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_entity::role::{CreateRole, Role, UpdateRole};
use adminhub_entity::user::{CreateUser, UpdateUser, User};

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{RoleRepository, UserRepository};

/// User persistence.
///
/// Emails are compared case-insensitively. Writes that would duplicate an
/// email fail with a `Conflict` error; a `role_id` that names no role fails
/// with a `Validation` error.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>>;

    /// Insert a new user.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Apply a partial update. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User>;

    /// Record the user's profile image.
    async fn set_image(&self, id: Uuid, key: &str, content_type: &str) -> AppResult<User>;
}

/// Role persistence. Role names are unique.
#[async_trait]
pub trait RoleStore: Send + Sync + Debug + 'static {
    /// List all roles ordered by name.
    async fn list(&self) -> AppResult<Vec<Role>>;

    /// Find a role by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;

    /// Find a role by exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Insert a new role.
    async fn create(&self, data: &CreateRole) -> AppResult<Role>;

    /// Apply a partial update. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: Uuid, data: &UpdateRole) -> AppResult<Role>;
}

/// The pair of stores shared by services.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User store.
    pub users: Arc<dyn UserStore>,
    /// Role store.
    pub roles: Arc<dyn RoleStore>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(db: &DatabasePool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.pool().clone())),
            roles: Arc::new(RoleRepository::new(db.pool().clone())),
        }
    }

    /// Stores backed by one shared in-memory store.
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Stores backed by the given in-memory store.
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            roles: store,
        }
    }
}
