//! User CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use adminhub_auth::password::PasswordHasher;
use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_database::store::UserStore;
use adminhub_entity::user::{CreateUser, UpdateUser, User, UserStatus};

use crate::context::RequestContext;

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext initial password.
    pub password: String,
    /// Role assignment.
    pub role_id: Option<Uuid>,
}

/// Input for a partial user update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role.
    pub role_id: Option<Uuid>,
    /// New status.
    pub status: Option<UserStatus>,
}

/// Handles user listing, creation and updates.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, password_min_length: usize) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            password_min_length,
        }
    }

    /// A page of users, newest first.
    pub async fn list_users(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let page = PageRequest::new(page.page, page.page_size);
        self.users.list(&page).await
    }

    /// A single user.
    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Create a user with a hashed password.
    pub async fn create_user(&self, ctx: &RequestContext, input: CreateUserInput) -> AppResult<User> {
        let name = non_blank(&input.name, "Name")?;
        self.check_password(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .users
            .create(&CreateUser {
                name,
                email: input.email.trim().to_lowercase(),
                password_hash,
                role_id: input.role_id,
            })
            .await?;

        info!(actor = %ctx.user_id, user_id = %user.id, "User created");
        Ok(user)
    }

    /// Apply a partial update.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateUserInput,
    ) -> AppResult<User> {
        let data = UpdateUser {
            name: input.name.as_deref().map(|n| non_blank(n, "Name")).transpose()?,
            email: input.email.map(|e| e.trim().to_lowercase()),
            role_id: input.role_id,
            status: input.status,
            password_hash: None,
        };

        let user = self.users.update(id, &data).await?;
        info!(actor = %ctx.user_id, user_id = %user.id, status = %user.status, "User updated");
        Ok(user)
    }

    fn check_password(&self, password: &str) -> AppResult<()> {
        if password.chars().count() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        Ok(())
    }
}

fn non_blank(value: &str, field: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}
