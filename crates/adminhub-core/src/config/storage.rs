//! Storage provider configuration.

use serde::{Deserialize, Serialize};

/// Local file storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum accepted user image size in bytes (default 5 MB).
    #[serde(default = "default_max_image")]
    pub max_image_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_image_size_bytes: default_max_image(),
        }
    }
}

impl StorageConfig {
    /// Root of the file storage provider; keys are relative to it.
    pub fn storage_root(&self) -> String {
        format!("{}/storage", self.data_root.trim_end_matches('/'))
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_max_image() -> u64 {
    5_242_880 // 5 MB
}
