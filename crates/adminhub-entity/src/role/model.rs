//! Role entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::permission::PermissionCatalog;

/// A named group of permissions assignable to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Unique role name.
    pub name: String,
    /// Granted permission names, sorted and deduplicated on write.
    pub permissions: Vec<String>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Effective permissions: stored names that still exist in the catalog.
    ///
    /// A name removed from the catalog after being stored grants nothing.
    pub fn effective_permissions(&self) -> BTreeSet<String> {
        self.permissions
            .iter()
            .filter(|name| PermissionCatalog::contains(name))
            .cloned()
            .collect()
    }
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    /// Role name.
    pub name: String,
    /// Normalized permission names.
    pub permissions: Vec<String>,
}

/// Partial update of a role. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRole {
    /// New role name.
    pub name: Option<String>,
    /// Replacement permission names, already normalized.
    pub permissions: Option<Vec<String>>,
}
