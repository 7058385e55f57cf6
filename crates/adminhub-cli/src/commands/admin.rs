//! Administrator account management.

use clap::{Args, Subcommand};
use tracing::info;

use adminhub_auth::password::PasswordHasher;
use adminhub_core::error::AppError;
use adminhub_database::Stores;
use adminhub_entity::permission::PermissionCatalog;
use adminhub_entity::role::{CreateRole, Role, UpdateRole};
use adminhub_entity::user::{CreateUser, UpdateUser, User, UserStatus};

use crate::output;

/// Name of the role granted to accounts created here.
pub const ADMIN_ROLE_NAME: &str = "Administrator";

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an administrator, or reset an existing account to one
    Create {
        /// Email
        #[arg(short, long)]
        email: String,
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        AdminCommand::Create {
            email,
            name,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            if password.chars().count() < config.auth.password_min_length {
                return Err(AppError::validation(format!(
                    "Password must be at least {} characters",
                    config.auth.password_min_length
                )));
            }

            let db = super::connect_database(&config).await?;
            let stores = Stores::postgres(&db);
            let (user, role) = ensure_administrator(&stores, email, name, &password).await?;
            db.close().await;

            output::print_success(&format!("Administrator '{}' ready", user.email));
            output::print_kv("User ID", &user.id.to_string());
            output::print_kv("Role", &role.name);
            output::print_kv("Permissions", &role.permissions.join(", "));
        }
    }

    Ok(())
}

/// Make sure the administrator role holds the whole catalog and that
/// `email` is an active account assigned to it with the given password.
pub async fn ensure_administrator(
    stores: &Stores,
    email: &str,
    name: &str,
    password: &str,
) -> Result<(User, Role), AppError> {
    let permissions: Vec<String> = PermissionCatalog::names().into_iter().collect();

    let role = match stores.roles.find_by_name(ADMIN_ROLE_NAME).await? {
        Some(role) => {
            let update = UpdateRole {
                name: None,
                permissions: Some(permissions),
            };
            stores.roles.update(role.id, &update).await?
        }
        None => {
            let create = CreateRole {
                name: ADMIN_ROLE_NAME.to_string(),
                permissions,
            };
            stores.roles.create(&create).await?
        }
    };

    let email = email.trim().to_lowercase();
    let password_hash = PasswordHasher::new().hash_password(password)?;

    let user = match stores.users.find_by_email(&email).await? {
        Some(existing) => {
            let update = UpdateUser {
                name: Some(name.to_string()),
                role_id: Some(role.id),
                status: Some(UserStatus::Active),
                password_hash: Some(password_hash),
                ..UpdateUser::default()
            };
            let user = stores.users.update(existing.id, &update).await?;
            info!(user_id = %user.id, "Existing account promoted to administrator");
            user
        }
        None => {
            let create = CreateUser {
                name: name.to_string(),
                email,
                password_hash,
                role_id: Some(role.id),
            };
            let user = stores.users.create(&create).await?;
            info!(user_id = %user.id, "Administrator created");
            user
        }
    };

    Ok((user, role))
}
