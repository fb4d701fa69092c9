//! Integration tests for the Warden HTTP client

use serde_json::json;
use warden_core::{LoginRequest, RegisterRequest, Role};
use warden_http::{ClientError, PublicClient, TypedClientBuilder};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8080/")
        .build_public()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "a.b.c" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let response = client.login(&credentials()).await.unwrap();

    assert_eq!(response.token, "a.b.c");
}

#[tokio::test]
async fn test_login_rejected_is_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let result = client.login(&credentials()).await;

    match result {
        Err(ClientError::Unauthorized(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_accepts_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "User registered successfully" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let response = client
        .register(&RegisterRequest {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        response.message.as_deref(),
        Some("User registered successfully")
    );
}

#[tokio::test]
async fn test_register_duplicate_is_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Email already registered" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let result = client
        .register(&RegisterRequest {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "hunter2".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::BadRequest(ref m)) if m == "Email already registered"));
}

#[tokio::test]
async fn test_refresh_token_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "x.y.z" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let response = client.refresh_token().await.unwrap();
    assert_eq!(response.token, "x.y.z");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_profile_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "role": "User"
        })))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri())
        .unwrap()
        .authenticate("access-token");
    let user = client.profile().await.unwrap();

    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn test_admin_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("user-token")
        .unwrap();
    let result = client.admin().await;

    assert!(matches!(result, Err(ClientError::Forbidden(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) is not listening in test environments
    let client = PublicClient::new("http://127.0.0.1:9").unwrap();
    let result = client.refresh_token().await;

    let err = result.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}
