//! Response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adminhub_core::types::response::Envelope;
use adminhub_entity::permission::FeatureArea;
use adminhub_entity::user::{User, UserStatus};

/// Success response in the uniform envelope.
#[derive(Debug, Clone)]
pub struct ApiResponse<T>(pub Envelope<T>);

impl<T> ApiResponse<T> {
    /// `200` with data.
    pub fn ok(data: T) -> Self {
        Self(Envelope::ok(data))
    }

    /// `201` with data.
    pub fn created(data: T) -> Self {
        Self(Envelope::created(data))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::OK);
        (status, Json(self.0)).into_response()
    }
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Assigned role.
    pub role_id: Option<Uuid>,
    /// Account status.
    pub status: UserStatus,
    /// Whether a profile image is stored.
    pub has_image: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            has_image: user.has_image(),
            id: user.id,
            name: user.name,
            email: user.email,
            role_id: user.role_id,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token, also set as the session cookie.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: UserResponse,
}

/// Permissions of one feature area.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionGroupResponse {
    /// Feature area.
    pub group: FeatureArea,
    /// Permission names, sorted.
    pub permissions: Vec<&'static str>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Package version.
    pub version: String,
}

/// Acknowledgement with a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}
