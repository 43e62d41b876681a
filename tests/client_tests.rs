//! Integration tests for client construction and configuration.
//!
//! These tests verify the public API surface: configuration building,
//! newtype validation, header setup, and thread safety.

use bmparts_api::{
    ApiError, ApiHost, ApiToken, BmClient, BmConfig, ConfigError, DocsRef, HttpClient, Options,
};

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_builder_full_workflow() {
    let config = BmConfig::builder()
        .token(ApiToken::new("my-token").unwrap())
        .host(ApiHost::new("https://api.bm.parts").unwrap())
        .user_agent_prefix("MyShop/3.1")
        .build()
        .unwrap();

    assert_eq!(config.token().as_ref(), "my-token");
    assert_eq!(config.base_uri(), "https://api.bm.parts");
    assert_eq!(config.user_agent_prefix(), Some("MyShop/3.1"));
}

#[test]
fn test_config_requires_token() {
    let result = BmConfig::builder().build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "token" })
    ));
}

#[test]
fn test_api_token_rejects_empty_values() {
    assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    assert!(matches!(
        ApiToken::new("   "),
        Err(ConfigError::EmptyApiToken)
    ));
}

#[test]
fn test_api_token_debug_is_masked() {
    let token = ApiToken::new("super-secret").unwrap();
    let debug = format!("{token:?}");

    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("*****"));
}

#[test]
fn test_api_host_validation() {
    assert!(ApiHost::new("https://api.bm.parts").is_ok());
    assert!(ApiHost::new("http://127.0.0.1:8080").is_ok());
    assert!(ApiHost::new("not-a-url").is_err());
    assert!(ApiHost::new("").is_err());
}

#[test]
fn test_api_host_preserves_scheme_and_port() {
    let host = ApiHost::new("http://localhost:4010/").unwrap();

    assert_eq!(host.as_ref(), "http://localhost:4010");
    assert_eq!(host.scheme(), "http");
    assert_eq!(host.host_name(), Some("localhost"));
}

// ============================================================================
// Client Construction
// ============================================================================

#[test]
fn test_client_default_headers() {
    let config = BmConfig::builder()
        .token(ApiToken::new("header-token").unwrap())
        .build()
        .unwrap();
    let http = HttpClient::new(&config);

    assert_eq!(
        http.default_headers().get("Authorization"),
        Some(&"Bearer header-token".to_string())
    );
    assert_eq!(
        http.default_headers().get("Accept"),
        Some(&"application/json".to_string())
    );
    assert!(http
        .default_headers()
        .get("User-Agent")
        .unwrap()
        .contains("BM Parts API Library"));
}

#[test]
fn test_multiple_clients_have_independent_configuration() {
    let config_a = BmConfig::builder()
        .token(ApiToken::new("token-a").unwrap())
        .build()
        .unwrap();
    let config_b = BmConfig::builder()
        .token(ApiToken::new("token-b").unwrap())
        .host(ApiHost::new("https://staging.bm.parts").unwrap())
        .build()
        .unwrap();

    let client_a = BmClient::new(&config_a);
    let client_b = BmClient::new(&config_b);

    assert_eq!(client_a.http().base_uri(), "https://api.bm.parts");
    assert_eq!(client_b.http().base_uri(), "https://staging.bm.parts");
}

#[test]
fn test_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BmClient>();
    assert_send_sync::<BmConfig>();
    assert_send_sync::<ApiError>();
}

#[tokio::test]
async fn test_client_shared_across_tasks() {
    let config = BmConfig::builder()
        .token(ApiToken::new("shared-token").unwrap())
        .build()
        .unwrap();
    let client = std::sync::Arc::new(BmClient::new(&config));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let client = std::sync::Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.http().base_uri().to_string()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "https://api.bm.parts");
    }
}

// ============================================================================
// Error Surface
// ============================================================================

#[test]
fn test_missing_parameters_error_message_format() {
    let err = ApiError::MissingParameters {
        missing: vec!["searched_at", "name"],
        docs: DocsRef::new("/garage", "post-garage-car"),
    };

    let msg = err.to_string();
    assert!(msg.contains("searched_at"));
    assert!(msg.contains("name"));
    assert!(msg.contains("/garage#post-garage-car"));
}

#[test]
fn test_options_bag_public_api() {
    let mut options = Options::new().with("a", 1);
    options.insert("b", "two");

    assert_eq!(options.len(), 2);
    assert!(!options.is_empty());
    assert!(options.contains("a"));
    assert_eq!(options.get("b"), Some(&serde_json::json!("two")));
}
