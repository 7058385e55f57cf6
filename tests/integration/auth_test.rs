//! Sign-in, session and sign-out.

use axum::http::{StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_sets_http_only_cookie() {
    let app = TestApp::new().await;
    app.create_user("admin@test.com", "password123", &["users_view"])
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "Admin@Test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert_eq!(response.body["data"]["user"]["email"], "admin@test.com");
    assert!(response.body["data"]["user"].get("password_hash").is_none());

    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("adminhub_session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_rejects_wrong_password_and_unknown_email() {
    let app = TestApp::new().await;
    app.create_user("user@test.com", "password123", &[]).await;

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "user@test.com", "password": "nope" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "nobody@test.com", "password": "nope" })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["error"]["message"], unknown.body["error"]["message"]);
}

#[tokio::test]
async fn test_login_validates_payload() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "not-an-email", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_session_reports_user_and_permissions() {
    let app = TestApp::new().await;
    let (id, token) = app
        .signed_in("me@test.com", &["users_view", "roles_view"])
        .await;

    let response = app
        .request("GET", "/api/auth/session", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], 200);
    let user = &response.body["data"]["user"];
    assert_eq!(user["id"], id.to_string());
    assert_eq!(
        user["permissions"],
        serde_json::json!(["roles_view", "users_view"])
    );
}

#[tokio::test]
async fn test_session_without_credentials_is_401_record() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/session", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "status": 401 }));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("bye@test.com", &[]).await;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .header(header::COOKIE, app.session_cookie(&token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("adminhub_session=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
