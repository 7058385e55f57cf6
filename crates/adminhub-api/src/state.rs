//! Application state shared across all handlers.

use std::sync::Arc;

use adminhub_auth::jwt::{JwtDecoder, JwtEncoder};
use adminhub_auth::{AccessGuard, SessionResolver};
use adminhub_core::config::AppConfig;
use adminhub_core::traits::storage::StorageProvider;
use adminhub_database::Stores;
use adminhub_i18n::{LocaleResolver, MessageCatalog};
use adminhub_service::{AuthService, ImageService, RoleService, UserService};
use adminhub_storage::ImageValidator;

/// Shared dependencies, passed to every handler via `State<AppState>`.
///
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// File storage for uploaded images
    pub storage: Arc<dyn StorageProvider>,

    // ── Request context ──────────────────────────────────────
    /// Session resolution and access decisions
    pub guard: AccessGuard,
    /// Locale selection and message bundles
    pub locales: LocaleResolver,

    // ── Services ─────────────────────────────────────────────
    /// Sign-in
    pub auth_service: Arc<AuthService>,
    /// User management
    pub user_service: Arc<UserService>,
    /// Role management
    pub role_service: Arc<RoleService>,
    /// User images
    pub image_service: Arc<ImageService>,
}

impl AppState {
    /// Wire services over the given stores, storage and message bundles.
    pub fn new(
        config: AppConfig,
        stores: Stores,
        storage: Arc<dyn StorageProvider>,
        messages: MessageCatalog,
    ) -> Self {
        let resolver = Arc::new(SessionResolver::new(
            JwtDecoder::new(&config.auth),
            Arc::clone(&stores.users),
            Arc::clone(&stores.roles),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            JwtEncoder::new(&config.auth),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            config.auth.password_min_length,
        ));
        let role_service = Arc::new(RoleService::new(Arc::clone(&stores.roles)));
        let image_service = Arc::new(ImageService::new(
            Arc::clone(&stores.users),
            Arc::clone(&storage),
            ImageValidator::new(config.storage.max_image_size_bytes),
        ));

        Self {
            config: Arc::new(config),
            storage,
            guard: AccessGuard::new(resolver),
            locales: LocaleResolver::new(messages),
            auth_service,
            user_service,
            role_service,
            image_service,
        }
    }
}
