//! API Integration Tests
//!
//! Self-contained: each test spawns its own server with the in-memory
//! identity store, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/login", &LoginRequest::seeded_user())
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(login.token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/login", &LoginRequest::new("user1", "password321"))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.message, "invalid credentials");
    assert_eq!(error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/login", &LoginRequest::new("user2", "password123"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Protected Resource Tests
// ============================================================================

#[tokio::test]
async fn test_login_then_access_protected_data() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/login", &LoginRequest::seeded_user())
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/protected/data", &login.token)
        .await
        .unwrap();
    let data: ProtectedData = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        data,
        ProtectedData {
            message: "This is protected data".to_string(),
            user_id: 1,
        }
    );
}

#[tokio::test]
async fn test_protected_data_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/protected/data").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(error.message, "no token");
}

#[tokio::test]
async fn test_protected_data_with_invalid_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/protected/data", "eyJhbGciOiJIUzI1NiJ9.e30.invalid")
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(error.message, "failed to authenticate");
}

#[tokio::test]
async fn test_token_from_another_server_rejected() {
    let issuer = TestServer::start().await.expect("Failed to start server");
    let mut config = integration_tests::test_config().unwrap();
    config.jwt.secret = "a-different-secret".to_string();
    let verifier = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = issuer
        .post("/auth/login", &LoginRequest::seeded_user())
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = verifier
        .get_auth("/protected/data", &login.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
}
