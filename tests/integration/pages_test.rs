//! Server-rendered pages behind the access guard.

use axum::http::{StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_anonymous_visitor_is_redirected_to_login() {
    let app = TestApp::new().await;

    for path in ["/", "/dashboard", "/users", "/roles/new"] {
        let response = app.get_with_cookie(path, None).await;
        assert!(response.status.is_redirection(), "{path}");
        assert_eq!(response.headers[header::LOCATION], "/login", "{path}");
    }
}

#[tokio::test]
async fn test_login_page_renders_for_anonymous_visitor() {
    let app = TestApp::new().await;

    let response = app.get_with_cookie("/login", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("<html lang=\"en\" dir=\"ltr\">"));
    assert!(response.text.contains("<title>Sign in | AdminHub</title>"));
}

#[tokio::test]
async fn test_login_page_redirects_signed_in_user() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("back@test.com", &[]).await;

    let response = app
        .get_with_cookie("/login", Some(&app.session_cookie(&token)))
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(response.headers[header::LOCATION], "/");
}

#[tokio::test]
async fn test_permitted_page_embeds_state() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("lister@test.com", &["users_view"]).await;

    let response = app
        .get_with_cookie("/users", Some(&app.session_cookie(&token)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("id=\"__ADMINHUB_STATE__\""));
    assert!(response.text.contains("lister@test.com"));
    assert!(response.text.contains("\"page\":\"users.list\""));
}

#[tokio::test]
async fn test_missing_permission_is_empty_forbidden() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("creator@test.com", &["roles_create"]).await;

    let response = app
        .get_with_cookie("/roles/new", Some(&app.session_cookie(&token)))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.text.is_empty());
}

#[tokio::test]
async fn test_locale_cookie_sets_direction() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("rtl@test.com", &["dashboard_view"]).await;
    let cookies = format!("{}; adminhub_locale=ar", app.session_cookie(&token));

    let response = app.get_with_cookie("/dashboard", Some(&cookies)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("<html lang=\"ar\" dir=\"rtl\">"));
}

#[tokio::test]
async fn test_profile_is_limited_to_its_owner() {
    let app = TestApp::new().await;
    let (me, token) = app.signed_in("owner@test.com", &[]).await;
    let other = app.create_user("other@test.com", "password123", &[]).await;
    let cookie = app.session_cookie(&token);

    let own = app
        .get_with_cookie(&format!("/profile/{me}"), Some(&cookie))
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let foreign = app
        .get_with_cookie(&format!("/profile/{other}"), Some(&cookie))
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_profile_id_redirects_anonymous_visitor() {
    let app = TestApp::new().await;

    let response = app.get_with_cookie("/profile/not-a-uuid", None).await;

    assert!(response.status.is_redirection());
    assert_eq!(response.headers[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_malformed_profile_id_is_bad_request_when_signed_in() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("typo@test.com", &[]).await;

    let response = app
        .get_with_cookie("/profile/not-a-uuid", Some(&app.session_cookie(&token)))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
