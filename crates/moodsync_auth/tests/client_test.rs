//! Auth client against a mock server: success bodies, server-message errors,
//! and the generic fallback when the error body carries no message.
//!
//! Run with: cargo test -p moodsync-auth --test client_test

use moodsync_auth::{AuthClient, AuthConfig, AuthError, TokenStore};

fn client_for(server: &mockito::ServerGuard) -> AuthClient {
    AuthClient::new(AuthConfig::new(server.url()))
}

#[tokio::test]
async fn test_login_returns_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "email": "a@b.c",
            "password": "pw",
        })))
        .with_status(200)
        .with_body(r#"{"token":"jwt-123","user":{"id":1,"username":"amy","email":"a@b.c"}}"#)
        .create_async()
        .await;

    let response = client_for(&server).login("a@b.c", "pw").await.unwrap();
    assert_eq!(response.token, "jwt-123");
    assert_eq!(response.user.unwrap().username, "amy");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_surfaces_server_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(400)
        .with_body(r#"{"message":"Invalid email or password"}"#)
        .create_async()
        .await;

    let err = client_for(&server).login("a@b.c", "bad").await.unwrap_err();
    match err {
        AuthError::Rejected(message) => assert_eq!(message, "Invalid email or password"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_generic_fallback_without_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(500)
        .with_body("<html>gateway error</html>")
        .create_async()
        .await;

    let err = client_for(&server).login("a@b.c", "pw").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn test_register_returns_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/register")
        .with_status(201)
        .with_body(r#"{"message":"User registered successfully"}"#)
        .create_async()
        .await;

    let response = client_for(&server)
        .register("amy", "a@b.c", "pw")
        .await
        .unwrap();
    assert_eq!(response.message, "User registered successfully");
}

#[tokio::test]
async fn test_register_duplicate_email_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/register")
        .with_status(400)
        .with_body(r#"{"message":"Email already exists"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .register("amy", "a@b.c", "pw")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already exists");
}

#[tokio::test]
async fn test_register_generic_fallback_without_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/register")
        .with_status(400)
        .with_body("{}")
        .create_async()
        .await;

    let err = client_for(&server)
        .register("amy", "a@b.c", "pw")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Registration failed");
}

#[tokio::test]
async fn test_register_and_login_stores_token() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/register")
        .with_status(201)
        .with_body(r#"{"message":"User registered successfully"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"token":"fresh-token"}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    let response = client_for(&server)
        .register_and_login("amy", "a@b.c", "pw", &store)
        .await
        .unwrap();
    assert_eq!(response.token, "fresh-token");
    assert_eq!(store.load().as_deref(), Some("fresh-token"));
}
