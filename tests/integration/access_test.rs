//! Access guard behavior on the JSON API.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_missing_session_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/admin/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["status"], 401);
    assert_eq!(response.body["error"]["code"], "UNAUTHORIZED");
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/admin/roles", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_granted_permission_allows() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("viewer@test.com", &["users_view"]).await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], 200);
}

#[tokio::test]
async fn test_view_only_user_cannot_create() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("viewer@test.com", &["users_view"]).await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({
                "name": "New",
                "email": "new@test.com",
                "password": "password123",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"]["code"], "FORBIDDEN");
    assert!(
        response.body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("users_create")
    );
}

#[tokio::test]
async fn test_exact_permission_allows_update() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("editor@test.com", &["roles_update"]).await;
    let role = app
        .stores
        .roles
        .create(&adminhub_entity::role::CreateRole {
            name: "support".into(),
            permissions: vec![],
        })
        .await
        .unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/roles/{}", role.id),
            Some(serde_json::json!({ "permissions": ["files_view"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["permissions"],
        serde_json::json!(["files_view"])
    );
}

#[tokio::test]
async fn test_inactive_user_is_denied() {
    let app = TestApp::new().await;
    let (id, token) = app.signed_in("gone@test.com", &["roles_view"]).await;
    app.deactivate(id).await;

    let session = app
        .request("GET", "/api/auth/session", None, Some(&token))
        .await;
    assert_eq!(session.body["status"], 403);
    assert!(session.body.get("data").is_none());

    let response = app
        .request("GET", "/api/admin/roles", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_wins_over_bearer() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("cookie@test.com", &["roles_view"]).await;

    let req = Request::builder()
        .uri("/api/admin/roles")
        .header(header::COOKIE, app.session_cookie(&token))
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_permission_catalog_requires_session() {
    let app = TestApp::new().await;

    let anonymous = app.request("GET", "/api/permissions", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let (_, token) = app.signed_in("plain@test.com", &[]).await;
    let response = app
        .request("GET", "/api/permissions", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let groups = response.body["data"].as_array().unwrap();
    let names: Vec<&str> = groups
        .iter()
        .map(|g| g["group"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["dashboard", "users", "roles", "files"]);
}

#[tokio::test]
async fn test_session_is_checked_before_payload() {
    let app = TestApp::new().await;

    let cases = [
        ("POST", "/api/admin/roles", serde_json::json!({ "name": "" })),
        ("POST", "/api/admin/users", serde_json::json!({ "bogus": 1 })),
        (
            "PUT",
            "/api/admin/users/00000000-0000-0000-0000-000000000000",
            serde_json::json!({ "status": "banned" }),
        ),
    ];
    for (method, path, body) in cases {
        let response = app.request(method, path, Some(body), None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body["error"]["code"], "UNAUTHORIZED");
    }

    let bad_query = app
        .request("GET", "/api/admin/users?page=abc", None, None)
        .await;
    assert_eq!(bad_query.status, StatusCode::UNAUTHORIZED);

    let not_multipart = app
        .request(
            "PUT",
            "/api/admin/users/00000000-0000-0000-0000-000000000000/image",
            Some(serde_json::json!({})),
            None,
        )
        .await;
    assert_eq!(not_multipart.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_permission_is_checked_before_payload() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("reader@test.com", &["roles_view"]).await;

    let response = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(serde_json::json!({ "name": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_authorized_bad_payload_is_validation_error() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("maker@test.com", &["roles_create"]).await;

    let response = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(serde_json::json!({ "name": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}
