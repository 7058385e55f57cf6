//! Upload and retrieval of user profile images.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::traits::storage::StorageProvider;
use adminhub_database::store::UserStore;
use adminhub_entity::user::User;
use adminhub_storage::ImageValidator;

/// Image bytes with their MIME type.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Raw image bytes.
    pub data: Bytes,
    /// MIME type.
    pub content_type: String,
}

/// Stores validated images and links them to users.
#[derive(Debug, Clone)]
pub struct ImageService {
    users: Arc<dyn UserStore>,
    storage: Arc<dyn StorageProvider>,
    validator: ImageValidator,
}

impl ImageService {
    /// Creates a new image service.
    pub fn new(
        users: Arc<dyn UserStore>,
        storage: Arc<dyn StorageProvider>,
        validator: ImageValidator,
    ) -> Self {
        Self {
            users,
            storage,
            validator,
        }
    }

    /// Validate and store `data` as the image of `user_id`.
    ///
    /// The previous image, if any, is removed after the user record points
    /// at the new one. If the record cannot be updated the new file is
    /// removed again.
    pub async fn upload(&self, user_id: Uuid, data: Bytes) -> AppResult<User> {
        let existing = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let validator = self.validator;
        let to_check = data.clone();
        let info = tokio::task::spawn_blocking(move || validator.validate(&to_check))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Image validation task failed", e))??;

        let key = ImageValidator::storage_key(user_id, &info);
        self.storage.write(&key, data).await?;
        let user = match self.users.set_image(user_id, &key, info.content_type).await {
            Ok(user) => user,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&key).await {
                    warn!(%user_id, key = %key, error = %cleanup, "Failed to remove unlinked image");
                }
                return Err(e);
            }
        };

        if let Some(old_key) = existing.image_key.filter(|old| *old != key) {
            if let Err(e) = self.storage.delete(&old_key).await {
                warn!(%user_id, key = %old_key, error = %e, "Failed to remove previous image");
            }
        }

        info!(
            %user_id,
            key = %key,
            content_type = info.content_type,
            width = info.width,
            height = info.height,
            "User image stored"
        );
        Ok(user)
    }

    /// The stored image of `user_id`.
    pub async fn read(&self, user_id: Uuid) -> AppResult<StoredImage> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let (Some(key), Some(content_type)) = (user.image_key, user.image_content_type) else {
            return Err(AppError::not_found("User has no image"));
        };

        let data = self.storage.read_bytes(&key).await?;
        Ok(StoredImage { data, content_type })
    }
}
