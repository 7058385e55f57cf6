//! Email and password sign-in issuing session tokens.

use std::sync::Arc;

use tracing::{info, warn};

use adminhub_auth::jwt::{IssuedToken, JwtEncoder};
use adminhub_auth::password::PasswordHasher;
use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_database::store::UserStore;
use adminhub_entity::user::User;

/// A successful sign-in.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued session token.
    pub token: IssuedToken,
    /// The signed-in user.
    pub user: User,
}

/// Verifies credentials and issues session tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(users: Arc<dyn UserStore>, encoder: JwtEncoder) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            encoder,
        }
    }

    /// Sign in with email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let invalid = || AppError::unauthorized("Invalid email or password");

        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            warn!(email = %email, "Login failed: unknown email");
            return Err(invalid());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid());
        }

        if !user.status.is_active() {
            warn!(user_id = %user.id, "Login refused: account inactive");
            return Err(AppError::forbidden("Account is inactive"));
        }

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, session_id = %token.session_id, "User signed in");
        Ok(LoginOutcome { token, user })
    }
}
