use super::*;
use mockito::{Matcher, Server};
use session::error::SESSION_EXPIRED_MESSAGE;

fn jane_body() -> String {
    serde_json::json!({
        "id": "u1",
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "role": "user"
    })
    .to_string()
}

// =============================================================
// login / register
// =============================================================

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "email": "jane@example.com",
            "password": "secret1"
        })))
        .with_status(200)
        .with_body(r#"{"token":"t-1","message":"Welcome back, Jane"}"#)
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&server.url());
    let request = LoginRequest { email: "jane@example.com".to_owned(), password: "secret1".to_owned() };
    let response = api.login(&request).await.expect("login ok");

    m.assert_async().await;
    assert_eq!(response.issued_token(), Some("t-1"));
    assert_eq!(response.message.as_deref(), Some("Welcome back, Jane"));
}

#[tokio::test]
async fn login_rejection_uses_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"token":null,"message":"Wrong password"}"#)
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&server.url());
    let request = LoginRequest { email: "jane@example.com".to_owned(), password: "nope".to_owned() };
    let err = api.login(&request).await.expect_err("rejected");

    assert_eq!(err, AuthError::Auth("Wrong password".to_owned()));
}

#[tokio::test]
async fn register_omits_missing_phone() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "password": "secret1"
        })))
        .with_status(201)
        .with_body(r#"{"token":"t-2"}"#)
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&server.url());
    let request = RegisterRequest {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone: None,
    };
    let response = api.register(&request).await.expect("register ok");

    m.assert_async().await;
    assert_eq!(response.issued_token(), Some("t-2"));
}

#[tokio::test]
async fn register_conflict_is_validation_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/register")
        .with_status(409)
        .with_body(r#"{"message":"Email already registered"}"#)
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&server.url());
    let request = RegisterRequest {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone: Some("555-0100".to_owned()),
    };
    let err = api.register(&request).await.expect_err("conflict");

    assert_eq!(err, AuthError::Validation("Email already registered".to_owned()));
}

// =============================================================
// profile / health
// =============================================================

#[tokio::test]
async fn profile_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/user/profile")
        .match_header("authorization", "Bearer t-1")
        .with_status(200)
        .with_body(jane_body())
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&format!("{}/", server.url()));
    let user = api.profile("t-1").await.expect("profile ok");

    m.assert_async().await;
    assert_eq!(user.full_name(), "Jane Doe");
}

#[tokio::test]
async fn profile_unauthorized_is_session_expired() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/user/profile")
        .with_status(401)
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&server.url());
    let err = api.profile("stale").await.expect_err("expired");

    assert_eq!(err, AuthError::Auth(SESSION_EXPIRED_MESSAGE.to_owned()));
}

#[tokio::test]
async fn health_decodes_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"health":"healthy"}"#)
        .create_async()
        .await;

    let api = ReqwestAuthApi::new(&server.url());
    assert!(api.health().await.expect("health ok").is_healthy());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Port 9 (discard) on loopback is not expected to accept HTTP.
    let api = ReqwestAuthApi::new("http://127.0.0.1:9");
    let err = api.health().await.expect_err("unreachable");
    assert_eq!(err, AuthError::network());
}
