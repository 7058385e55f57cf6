//! User administration and user image endpoints.

use std::io::Cursor;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, TestResponse};

const ALL_USER_PERMISSIONS: &[&str] = &[
    "users_view",
    "users_create",
    "users_update",
    "files_view",
    "files_upload",
];

async fn user_admin(app: &TestApp) -> String {
    let (_, token) = app
        .signed_in("users-admin@test.com", ALL_USER_PERMISSIONS)
        .await;
    token
}

async fn create(app: &TestApp, token: &str, email: &str) -> TestResponse {
    app.request(
        "POST",
        "/api/admin/users",
        Some(json!({ "name": "Someone", "email": email, "password": "password123" })),
        Some(token),
    )
    .await
}

fn png() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

fn multipart_request(path: &str, token: &str, data: &[u8]) -> Request<Body> {
    let boundary = "adminhub-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"avatar.png\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_create_user() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;

    let response = create(&app, &token, "New.Person@Test.com").await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["email"], "new.person@test.com");
    assert_eq!(data["status"], "active");
    assert_eq!(data["has_image"], false);
    assert!(data.get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts_case_insensitively() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;

    assert_eq!(
        create(&app, &token, "dup@test.com").await.status,
        StatusCode::CREATED
    );
    let second = create(&app, &token, "DUP@test.com").await;

    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_create_validates_input() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;

    let bad_email = create(&app, &token, "not-an-email").await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({ "name": "Short", "email": "short@test.com", "password": "abc" })),
            Some(&token),
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(short_password.body["error"]["code"], "VALIDATION_ERROR");

    let unknown_role = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({
                "name": "Orphan",
                "email": "orphan@test.com",
                "password": "password123",
                "role_id": Uuid::new_v4(),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown_role.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_paginated_newest_first() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;
    create(&app, &token, "first@test.com").await;
    create(&app, &token, "second@test.com").await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?page=1&page_size=1",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["email"], "second@test.com");
    assert_eq!(page["page_size"], 1);
    assert_eq!(page["total_items"], 3);
    assert_eq!(page["total_pages"], 3);
}

#[tokio::test]
async fn test_list_far_past_the_end_is_empty() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?page=18446744073709551615&page_size=100",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert!(page["items"].as_array().unwrap().is_empty());
    assert_eq!(page["total_items"], 1);
}

#[tokio::test]
async fn test_update_user_status_and_name() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;
    let created = create(&app, &token, "target@test.com").await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{id}"),
            Some(json!({ "name": "Renamed", "status": "inactive" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Renamed");
    assert_eq!(response.body["data"]["status"], "inactive");

    let fetched = app
        .request("GET", &format!("/api/admin/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.body["data"]["status"], "inactive");
}

#[tokio::test]
async fn test_upload_and_read_image() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;
    let created = create(&app, &token, "pic@test.com").await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let path = format!("/api/admin/users/{id}/image");

    let missing = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let data = png();
    let uploaded = app.send(multipart_request(&path, &token, &data)).await;
    assert_eq!(uploaded.status, StatusCode::OK, "{:?}", uploaded.body);
    assert_eq!(uploaded.body["data"]["has_image"], true);

    let read = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(read.headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(read.bytes, data);
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let app = TestApp::new().await;
    let token = user_admin(&app).await;
    let created = create(&app, &token, "text@test.com").await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .send(multipart_request(
            &format!("/api/admin/users/{id}/image"),
            &token,
            b"definitely not an image",
        ))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_requires_files_upload() {
    let app = TestApp::new().await;
    let (id, token) = app.signed_in("no-upload@test.com", &["users_view"]).await;

    let response = app
        .send(multipart_request(
            &format!("/api/admin/users/{id}/image"),
            &token,
            &png(),
        ))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
