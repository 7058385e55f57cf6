//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::UserStatus;

/// An administrator account of the console.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique email address, stored lowercase.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role, if any.
    pub role_id: Option<Uuid>,
    /// Account status.
    pub status: UserStatus,
    /// Storage key of the profile image.
    pub image_key: Option<String>,
    /// MIME type of the profile image.
    pub image_content_type: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the user has an uploaded profile image.
    pub fn has_image(&self) -> bool {
        self.image_key.is_some()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address, already lowercased.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role_id: Option<Uuid>,
}

/// Partial update of a user. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address, already lowercased.
    pub email: Option<String>,
    /// New role assignment.
    pub role_id: Option<Uuid>,
    /// New account status.
    pub status: Option<UserStatus>,
    /// New password hash.
    pub password_hash: Option<String>,
}
