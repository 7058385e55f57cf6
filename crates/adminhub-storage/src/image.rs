//! User image validation.
//!
//! Uploads must decode as PNG, JPEG, GIF or WebP and stay within the
//! configured size limit.

use image::ImageFormat;
use uuid::Uuid;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;

/// Facts about an accepted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// MIME type, e.g. `image/png`.
    pub content_type: &'static str,
    /// File extension without the dot.
    pub extension: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Validates uploaded images.
#[derive(Debug, Clone, Copy)]
pub struct ImageValidator {
    max_size_bytes: u64,
}

impl ImageValidator {
    /// Create a validator with the given size limit.
    pub fn new(max_size_bytes: u64) -> Self {
        Self { max_size_bytes }
    }

    /// Check size, sniff the format and fully decode the image.
    ///
    /// Decoding is CPU-bound; async callers should run it on a blocking thread.
    pub fn validate(&self, data: &[u8]) -> AppResult<ImageInfo> {
        if data.is_empty() {
            return Err(AppError::validation("Image file is empty"));
        }
        if data.len() as u64 > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "Image exceeds the maximum size of {} bytes",
                self.max_size_bytes
            )));
        }

        let format = image::guess_format(data)
            .map_err(|_| AppError::validation("Unrecognized image format"))?;
        let (content_type, extension) = match format {
            ImageFormat::Png => ("image/png", "png"),
            ImageFormat::Jpeg => ("image/jpeg", "jpg"),
            ImageFormat::Gif => ("image/gif", "gif"),
            ImageFormat::WebP => ("image/webp", "webp"),
            other => {
                return Err(AppError::validation(format!(
                    "Unsupported image format: {other:?}"
                )));
            }
        };

        let decoded = image::load_from_memory_with_format(data, format).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Image could not be decoded", e)
        })?;

        Ok(ImageInfo {
            content_type,
            extension,
            width: decoded.width(),
            height: decoded.height(),
        })
    }

    /// Storage key for a user's image.
    pub fn storage_key(user_id: Uuid, info: &ImageInfo) -> String {
        format!("images/{user_id}/{}.{}", Uuid::now_v7(), info.extension)
    }
}
