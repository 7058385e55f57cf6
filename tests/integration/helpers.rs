//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use adminhub_api::AppState;
use adminhub_auth::password::PasswordHasher;
use adminhub_core::config::AppConfig;
use adminhub_database::{MemoryStore, Stores};
use adminhub_entity::role::CreateRole;
use adminhub_entity::user::{CreateUser, UpdateUser, UserStatus};
use adminhub_i18n::MessageCatalog;
use adminhub_storage::LocalStorageProvider;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct setup
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
    _storage_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let storage_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = Arc::new(
            LocalStorageProvider::new(storage_dir.path())
                .await
                .expect("Failed to init storage"),
        );

        let messages = MessageCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/locales"))
            .expect("Failed to load message bundles");

        let stores = Stores::from_memory(Arc::new(MemoryStore::new()));
        let state = AppState::new(config.clone(), stores.clone(), storage, messages);
        let router = adminhub_api::router::build_router(state);

        Self {
            router,
            stores,
            config,
            _storage_dir: storage_dir,
        }
    }

    /// Create an active user holding exactly `permissions` through a
    /// dedicated role, and return their ID
    pub async fn create_user(&self, email: &str, password: &str, permissions: &[&str]) -> Uuid {
        let role = self
            .stores
            .roles
            .create(&CreateRole {
                name: format!("role-for-{email}"),
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            })
            .await
            .expect("Failed to create role");

        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");

        self.stores
            .users
            .create(&CreateUser {
                name: email.split('@').next().unwrap_or(email).to_string(),
                email: email.to_string(),
                password_hash: hash,
                role_id: Some(role.id),
            })
            .await
            .expect("Failed to create user")
            .id
    }

    /// Mark a user inactive
    pub async fn deactivate(&self, id: Uuid) {
        self.stores
            .users
            .update(
                id,
                &UpdateUser {
                    status: Some(UserStatus::Inactive),
                    ..UpdateUser::default()
                },
            )
            .await
            .expect("Failed to deactivate user");
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Create a user with `permissions` and return their ID and token
    pub async fn signed_in(&self, email: &str, permissions: &[&str]) -> (Uuid, String) {
        let id = self.create_user(email, "password123", permissions).await;
        let token = self.login(email, "password123").await;
        (id, token)
    }

    /// Make a JSON request, authenticating with a bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// Make a GET request carrying the given `Cookie` header
    pub async fn get_with_cookie(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::empty()).expect("Failed to build request"))
            .await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let text = String::from_utf8_lossy(&bytes).into_owned();

        TestResponse {
            status,
            headers,
            body,
            text,
            bytes: bytes.to_vec(),
        }
    }

    /// Session cookie header value for `token`
    pub fn session_cookie(&self, token: &str) -> String {
        format!("{}={}", self.config.session.cookie_name, token)
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Body as text
    pub text: String,
    /// Raw body
    pub bytes: Vec<u8>,
}
