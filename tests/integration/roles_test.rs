//! Role administration endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn role_admin(app: &TestApp) -> String {
    let (_, token) = app
        .signed_in(
            "roles-admin@test.com",
            &["roles_view", "roles_create", "roles_update"],
        )
        .await;
    token
}

#[tokio::test]
async fn test_create_role_echoes_name_and_permissions() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(json!({ "name": "editor", "permissions": ["users_view"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], 201);
    assert_eq!(response.body["data"]["name"], "editor");
    assert_eq!(response.body["data"]["permissions"], json!(["users_view"]));
    assert!(response.body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_permissions_are_deduplicated_and_sorted() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(json!({
                "name": "auditor",
                "permissions": ["users_view", "dashboard_view", "users_view"],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body["data"]["permissions"],
        json!(["dashboard_view", "users_view"])
    );
}

#[tokio::test]
async fn test_unknown_permission_is_rejected() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(json!({ "name": "weird", "permissions": ["users_delete"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
    assert!(
        response.body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("users_delete")
    );
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;
    let body = json!({ "name": "editor", "permissions": [] });

    let first = app
        .request("POST", "/api/admin/roles", Some(body.clone()), Some(&token))
        .await;
    let second = app
        .request("POST", "/api/admin/roles", Some(body), Some(&token))
        .await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(json!({ "permissions": "users_view" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_update_and_list() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;

    let created = app
        .request(
            "POST",
            "/api/admin/roles",
            Some(json!({ "name": "support", "permissions": ["users_view"] })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/admin/roles/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["name"], "support");

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/roles/{id}"),
            Some(json!({ "name": "helpdesk" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "helpdesk");
    assert_eq!(updated.body["data"]["permissions"], json!(["users_view"]));

    let listed = app
        .request("GET", "/api/admin/roles", None, Some(&token))
        .await;
    let names: Vec<&str> = listed.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"helpdesk"));
    assert!(!names.contains(&"support"));
}

#[tokio::test]
async fn test_bad_and_unknown_ids() {
    let app = TestApp::new().await;
    let token = role_admin(&app).await;

    let bad = app
        .request("GET", "/api/admin/roles/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "GET",
            &format!("/api/admin/roles/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"]["code"], "NOT_FOUND");
}
