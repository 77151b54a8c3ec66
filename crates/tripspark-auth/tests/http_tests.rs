//! End-to-end tests of the HTTP routes using axum's Router.
//!
//! The identity provider is a wiremock server; the router is driven with
//! `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tripspark_auth::config::{ClientConfig, Config};
use tripspark_auth::flow::AuthExchangeFlow;
use tripspark_auth::server::routes::create_router;

fn build_router(config: &Config) -> axum::Router {
    create_router(AuthExchangeFlow::from_config(config).unwrap())
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap()
}

// =============================================================================
// Static routes
// =============================================================================

#[tokio::test]
async fn test_index_page() {
    let app = build_router(&Config::for_testing("http://unused.localhost"));

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(body_text(response).await.contains("Login with Google"));
}

#[tokio::test]
async fn test_health() {
    let app = build_router(&Config::for_testing("http://unused.localhost"));

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "tripspark-auth");
}

// =============================================================================
// /login
// =============================================================================

#[tokio::test]
async fn test_login_redirects_to_provider() {
    let app = build_router(&Config::for_testing("https://accounts.example.com"));

    let response = get(app, "/login").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    let url = url::Url::parse(location).unwrap();
    assert_eq!(url.host_str(), Some("accounts.example.com"));
    assert_eq!(url.path(), "/o/oauth2/v2/auth");

    let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs["client_id"], "test-client-id");
    assert_eq!(pairs["redirect_uri"], "http://localhost:8080/oauth2/callback");
    assert_eq!(pairs["response_type"], "code");
    assert_eq!(pairs["scope"], "openid email profile");
    assert_eq!(pairs["access_type"], "online");
    assert_eq!(pairs["prompt"], "consent");
}

#[tokio::test]
async fn test_login_without_client_id_is_500() {
    let mut config = Config::for_testing("https://accounts.example.com");
    config.client = ClientConfig::new(None, None, Some("https://x/y".to_string()));
    let app = build_router(&config);

    let response = get(app, "/login").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "GOOGLE_CLIENT_ID not set");
}

#[tokio::test]
async fn test_login_without_redirect_uri_is_500() {
    let mut config = Config::for_testing("https://accounts.example.com");
    config.client = ClientConfig::new(Some("id".to_string()), Some("s".to_string()), None);
    let app = build_router(&config);

    let response = get(app, "/login").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "GOOGLE_REDIRECT_URI not set");
}

// =============================================================================
// /oauth2/callback
// =============================================================================

#[tokio::test]
async fn test_callback_provider_error_is_400() {
    let app = build_router(&Config::for_testing("http://unused.localhost"));

    let response = get(app, "/oauth2/callback?error=access_denied").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Error from Google: access_denied");
}

#[tokio::test]
async fn test_callback_missing_code_is_400() {
    let app = build_router(&Config::for_testing("http://unused.localhost"));

    let response = get(app, "/oauth2/callback").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Missing 'code' parameter");
}

#[tokio::test]
async fn test_callback_without_secret_is_500() {
    let mut config = Config::for_testing("http://unused.localhost");
    config.client = ClientConfig::new(Some("id".to_string()), None, Some("https://x/y".to_string()));
    let app = build_router(&config);

    let response = get(app, "/oauth2/callback?code=abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Client ID/Secret not configured");
}

#[tokio::test]
async fn test_callback_renders_claims() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id_token": "T"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "traveller@example.com",
            "sub": "110169484474386276334",
            "aud": "test-client-id"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = build_router(&Config::for_testing(&mock_server.uri()));

    let response = get(app, "/oauth2/callback?code=4%2F0AbC").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<b>Email:</b> traveller@example.com"));
    assert!(html.contains("<b>Sub (Google user ID):</b> 110169484474386276334"));
    assert!(html.contains("Raw user info"));
    assert!(html.contains("aud"));
}

#[tokio::test]
async fn test_callback_token_failure_is_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "a"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = build_router(&Config::for_testing(&mock_server.uri()));

    let response = get(app, "/oauth2/callback?code=abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.contains("no id_token in response"));
    assert!(!body.contains("test-client-secret"));
}

#[tokio::test]
async fn test_callback_claims_failure_is_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id_token": "T"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
        .mount(&mock_server)
        .await;

    let app = build_router(&Config::for_testing(&mock_server.uri()));

    let response = get(app, "/oauth2/callback?code=abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.starts_with("Error calling tokeninfo"));
}

#[tokio::test]
async fn test_callback_transport_failure_hides_id_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id_token": "SECRET_ID_TOKEN"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri())
        .with_request_timeout(Duration::from_millis(300));
    let app = build_router(&config);

    let response = get(app, "/oauth2/callback?code=abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.starts_with("Error calling tokeninfo"));
    assert!(!body.contains("SECRET_ID_TOKEN"), "body: {body}");
}
