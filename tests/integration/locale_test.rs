//! Locale selection from the language cookie.

use axum::http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_no_cookie_selects_english() {
    let app = TestApp::new().await;

    let response = app.get_with_cookie("/api/i18n/messages", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["locale"], "en");
    assert_eq!(response.body["data"]["direction"], "ltr");
    assert_eq!(
        response.body["data"]["messages"]["pages"]["login"]["title"],
        "Sign in"
    );
}

#[tokio::test]
async fn test_unsupported_cookie_falls_back_to_english() {
    let app = TestApp::new().await;

    for value in ["de", "EN", "", "fr-FR"] {
        let cookie = format!("adminhub_locale={value}");
        let response = app
            .get_with_cookie("/api/i18n/messages", Some(&cookie))
            .await;
        assert_eq!(response.body["data"]["locale"], "en", "cookie {value:?}");
        assert_eq!(
            response.body["data"]["messages"]["pages"]["login"]["title"],
            "Sign in"
        );
    }
}

#[tokio::test]
async fn test_supported_cookies_select_their_bundle() {
    let app = TestApp::new().await;

    let fr = app
        .get_with_cookie("/api/i18n/messages", Some("adminhub_locale=fr"))
        .await;
    assert_eq!(fr.body["data"]["locale"], "fr");
    assert_eq!(
        fr.body["data"]["messages"]["pages"]["login"]["title"],
        "Connexion"
    );

    let ar = app
        .get_with_cookie("/api/i18n/messages", Some("adminhub_locale=ar"))
        .await;
    assert_eq!(ar.body["data"]["locale"], "ar");
    assert_eq!(ar.body["data"]["direction"], "rtl");
}

#[tokio::test]
async fn test_set_locale_sets_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/api/i18n/locale", Some(json!({ "locale": "fr" })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["locale"], "fr");
    let cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("adminhub_locale=fr"));
}

#[tokio::test]
async fn test_set_locale_rejects_unsupported_value() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/api/i18n/locale", Some(json!({ "locale": "de" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
    assert!(response.headers.get(header::SET_COOKIE).is_none());
}
