//! The static permission catalog.
//!
//! Permissions are keyed by name. The catalog has no meaningful order;
//! listings are sorted by name so output is stable.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use adminhub_core::error::AppError;

use super::model::{FeatureArea, Permission};

/// View the landing dashboard.
pub const DASHBOARD_VIEW: &str = "dashboard_view";
/// List and read user accounts.
pub const USERS_VIEW: &str = "users_view";
/// Create user accounts.
pub const USERS_CREATE: &str = "users_create";
/// Edit user accounts.
pub const USERS_UPDATE: &str = "users_update";
/// List and read roles.
pub const ROLES_VIEW: &str = "roles_view";
/// Create roles.
pub const ROLES_CREATE: &str = "roles_create";
/// Edit roles.
pub const ROLES_UPDATE: &str = "roles_update";
/// Read uploaded files.
pub const FILES_VIEW: &str = "files_view";
/// Upload files.
pub const FILES_UPLOAD: &str = "files_upload";

const ENTRIES: &[Permission] = &[
    Permission { name: DASHBOARD_VIEW, group: FeatureArea::Dashboard },
    Permission { name: USERS_VIEW, group: FeatureArea::Users },
    Permission { name: USERS_CREATE, group: FeatureArea::Users },
    Permission { name: USERS_UPDATE, group: FeatureArea::Users },
    Permission { name: ROLES_VIEW, group: FeatureArea::Roles },
    Permission { name: ROLES_CREATE, group: FeatureArea::Roles },
    Permission { name: ROLES_UPDATE, group: FeatureArea::Roles },
    Permission { name: FILES_VIEW, group: FeatureArea::Files },
    Permission { name: FILES_UPLOAD, group: FeatureArea::Files },
];

static CATALOG: LazyLock<BTreeMap<&'static str, Permission>> =
    LazyLock::new(|| ENTRIES.iter().map(|p| (p.name, *p)).collect());

/// Read-only access to the permission catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionCatalog;

impl PermissionCatalog {
    /// Look up a permission by name.
    pub fn get(name: &str) -> Option<&'static Permission> {
        CATALOG.get(name)
    }

    /// Whether `name` is a known permission.
    pub fn contains(name: &str) -> bool {
        CATALOG.contains_key(name)
    }

    /// All permissions, sorted by name.
    pub fn all() -> impl Iterator<Item = &'static Permission> {
        CATALOG.values()
    }

    /// All permission names.
    pub fn names() -> BTreeSet<String> {
        CATALOG.keys().map(|k| k.to_string()).collect()
    }

    /// Permission names grouped by feature area.
    pub fn grouped() -> BTreeMap<FeatureArea, Vec<&'static str>> {
        let mut groups: BTreeMap<FeatureArea, Vec<&'static str>> = BTreeMap::new();
        for permission in CATALOG.values() {
            groups.entry(permission.group).or_default().push(permission.name);
        }
        groups
    }

    /// Validate a client-supplied list of names.
    ///
    /// Returns the names deduplicated and sorted, or a validation error
    /// listing every unknown name.
    pub fn normalize<I, S>(names: I) -> Result<Vec<String>, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known = BTreeSet::new();
        let mut unknown = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if Self::contains(name) {
                known.insert(name.to_string());
            } else {
                unknown.insert(name.to_string());
            }
        }

        if !unknown.is_empty() {
            let list: Vec<String> = unknown.into_iter().collect();
            return Err(AppError::validation(format!(
                "Unknown permissions: {}",
                list.join(", ")
            )));
        }

        Ok(known.into_iter().collect())
    }
}
