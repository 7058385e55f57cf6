//! Permission value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature area a permission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureArea {
    /// Landing dashboard.
    Dashboard,
    /// User account management.
    Users,
    /// Role and permission-group management.
    Roles,
    /// Uploaded files.
    Files,
}

impl FeatureArea {
    /// Return the area as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Roles => "roles",
            Self::Files => "files",
        }
    }
}

impl fmt::Display for FeatureArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named capability token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Permission {
    /// Unique `feature_action` name.
    pub name: &'static str,
    /// Feature area.
    pub group: FeatureArea,
}
