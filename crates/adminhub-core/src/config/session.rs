//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// How the session credential travels between browser and server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Set the `Secure` attribute (HTTPS only).
    #[serde(default)]
    pub cookie_secure: bool,
    /// `SameSite` attribute: `"strict"`, `"lax"`, or `"none"`.
    #[serde(default = "default_same_site")]
    pub cookie_same_site: String,
    /// Accept `Authorization: Bearer` tokens when no cookie is present.
    #[serde(default = "default_true")]
    pub bearer_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            cookie_same_site: default_same_site(),
            bearer_enabled: default_true(),
        }
    }
}

fn default_cookie_name() -> String {
    "adminhub_session".to_string()
}

fn default_same_site() -> String {
    "lax".to_string()
}

fn default_true() -> bool {
    true
}
