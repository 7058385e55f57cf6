//! Credentials presented by a request.

/// Raw session tokens found on a request.
///
/// The cookie takes precedence; the bearer token is only consulted when no
/// session cookie was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Value of the session cookie.
    pub cookie: Option<String>,
    /// Token from an `Authorization: Bearer` header.
    pub bearer: Option<String>,
}

impl Credentials {
    /// Credentials carried by a session cookie.
    pub fn from_cookie(token: impl Into<String>) -> Self {
        Self {
            cookie: Some(token.into()),
            bearer: None,
        }
    }

    /// Credentials carried by a bearer token.
    pub fn from_bearer(token: impl Into<String>) -> Self {
        Self {
            cookie: None,
            bearer: Some(token.into()),
        }
    }

    /// The token to verify, if any.
    pub fn token(&self) -> Option<&str> {
        non_blank(&self.cookie).or_else(|| non_blank(&self.bearer))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|t| !t.is_empty())
}
