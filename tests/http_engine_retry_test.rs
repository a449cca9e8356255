use atlassian_learning_mcp::config::model::{
    Credentials, DeploymentVariant, HttpTimeouts, Preferences, Product, ProductConfig,
    RuntimeConfig,
};
use atlassian_learning_mcp::error::GatewayError;
use atlassian_learning_mcp::http::{HttpEngine, Idempotency};
use reqwest::Method;
use serde_json::Value;
use std::collections::HashMap;

fn config_for(base_url: &str, max_retries: u32) -> RuntimeConfig {
    let mut products = HashMap::new();
    products.insert(
        Product::Jira,
        ProductConfig {
            base_url: Some(base_url.to_string()),
            enabled: true,
        },
    );
    RuntimeConfig {
        instance_name: "retry-test-instance".to_string(),
        variant: DeploymentVariant::Cloud,
        products,
        credentials: Credentials {
            email: "tester@example.com".to_string(),
            secret: "token".to_string(),
            auth_type: None,
        },
        timeouts: HttpTimeouts {
            connect_ms: 2_000,
            read_ms: 2_000,
        },
        preferences: Preferences {
            theme: String::new(),
            log_level: "info".to_string(),
            max_retries,
            timeout_seconds: 5,
        },
        active_profile: None,
        list_tools_only: false,
    }
}

#[tokio::test]
async fn safe_call_retries_once_on_server_error_then_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let base_url = server.url();

    let default_mock = server
        .mock("GET", "/rest/api/2/issue/TEST-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "TEST-1"}"#)
        .create();

    let server_error_mock = server
        .mock("GET", "/rest/api/2/issue/TEST-1")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "internal error"}"#)
        .expect(1)
        .create();

    let config = config_for(&base_url, 2);
    let engine = HttpEngine::new(&config.timeouts).expect("build http engine");
    let url = format!("{base_url}/rest/api/2/issue/TEST-1");

    let result: Result<Value, GatewayError> = engine
        .send_json(Method::GET, &url, &config, None::<&Value>, Idempotency::Safe)
        .await;

    assert!(result.is_ok(), "expected eventual success, got {result:?}");
    server_error_mock.assert();
    default_mock.assert();
}

#[tokio::test]
async fn mutating_call_is_not_retried_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let base_url = server.url();

    let server_error_mock = server
        .mock("POST", "/rest/api/2/issue")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "internal error"}"#)
        .expect(1)
        .create();

    let config = config_for(&base_url, 3);
    let engine = HttpEngine::new(&config.timeouts).expect("build http engine");
    let url = format!("{base_url}/rest/api/2/issue");

    let result: Result<Value, GatewayError> = engine
        .send_json(
            Method::POST,
            &url,
            &config,
            Some(&serde_json::json!({"fields": {}})),
            Idempotency::Mutating,
        )
        .await;

    assert!(matches!(result, Err(GatewayError::ServerError { status: 500, .. })));
    server_error_mock.assert();
}

#[tokio::test]
async fn two_server_errors_then_success_eventually_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let base_url = server.url();

    let success_mock = server
        .mock("GET", "/rest/api/2/issue/TEST-5")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "TEST-5"}"#)
        .create();

    let server_error_mock = server
        .mock("GET", "/rest/api/2/issue/TEST-5")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "internal error"}"#)
        .expect(2)
        .create();

    let config = config_for(&base_url, 3);
    let engine = HttpEngine::new(&config.timeouts).expect("build http engine");
    let url = format!("{base_url}/rest/api/2/issue/TEST-5");

    let result: Result<Value, GatewayError> = engine
        .send_json(Method::GET, &url, &config, None::<&Value>, Idempotency::Safe)
        .await;

    assert!(result.is_ok(), "expected success after two retries, got {result:?}");
    server_error_mock.assert();
    success_mock.assert();
}

#[tokio::test]
async fn not_found_status_maps_to_not_found_error() {
    let mut server = mockito::Server::new_async().await;
    let base_url = server.url();

    let mock = server
        .mock("GET", "/rest/api/2/issue/MISSING-1")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errorMessages": ["Issue does not exist"]}"#)
        .expect(1)
        .create();

    let config = config_for(&base_url, 2);
    let engine = HttpEngine::new(&config.timeouts).expect("build http engine");
    let url = format!("{base_url}/rest/api/2/issue/MISSING-1");

    let result: Result<Value, GatewayError> = engine
        .send_json(Method::GET, &url, &config, None::<&Value>, Idempotency::Safe)
        .await;

    assert!(matches!(result, Err(GatewayError::NotFoundError { .. })));
    mock.assert();
}

#[tokio::test]
async fn client_error_status_maps_to_client_error() {
    let mut server = mockito::Server::new_async().await;
    let base_url = server.url();

    let mock = server
        .mock("GET", "/rest/api/2/issue/TEST-1")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "bad request"}"#)
        .expect(1)
        .create();

    let config = config_for(&base_url, 2);
    let engine = HttpEngine::new(&config.timeouts).expect("build http engine");
    let url = format!("{base_url}/rest/api/2/issue/TEST-1");

    let result: Result<Value, GatewayError> = engine
        .send_json(Method::GET, &url, &config, None::<&Value>, Idempotency::Safe)
        .await;

    assert!(matches!(result, Err(GatewayError::ClientError { status: 400, .. })));
    mock.assert();
}

#[tokio::test]
async fn server_error_status_maps_to_server_error_when_retries_exhausted() {
    let mut server = mockito::Server::new_async().await;
    let base_url = server.url();

    let mock = server
        .mock("POST", "/rest/api/2/issue")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "unavailable"}"#)
        .expect(1)
        .create();

    let config = config_for(&base_url, 2);
    let engine = HttpEngine::new(&config.timeouts).expect("build http engine");
    let url = format!("{base_url}/rest/api/2/issue");

    let result: Result<Value, GatewayError> = engine
        .send_json(
            Method::POST,
            &url,
            &config,
            Some(&serde_json::json!({"fields": {}})),
            Idempotency::Mutating,
        )
        .await;

    assert!(matches!(result, Err(GatewayError::ServerError { status: 503, .. })));
    mock.assert();
}
