//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use adminhub_entity::user::UserStatus;

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create role request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoleRequest {
    /// Role name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,
    /// Permission names from the catalog.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Update role request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    /// New name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: Option<String>,
    /// Replacement permissions.
    pub permissions: Option<Vec<String>>,
}

/// Create user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: String,
    /// Email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role assignment.
    pub role_id: Option<Uuid>,
}

/// Update user request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: Option<String>,
    /// New email.
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    /// New role.
    pub role_id: Option<Uuid>,
    /// New status.
    pub status: Option<UserStatus>,
}

/// Language selection request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetLocaleRequest {
    /// One of `en`, `fr`, `ar`.
    #[validate(length(min = 2, max = 2, message = "Locale must be a two-letter code"))]
    pub locale: String,
}
