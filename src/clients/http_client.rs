//! Async HTTP client for the BM Parts API.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::BmConfig;

/// Fallback retry delay in seconds when the server gives no hint.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Authenticated HTTP client carrying the base URI and default headers.
///
/// Every request goes out with `Accept: application/json`, a bearer
/// `Authorization` header built from the configured token, and a
/// User-Agent identifying the SDK. Responses with status 429 or 500 are
/// retried up to the request's attempt budget; 429 honors `Retry-After`.
///
/// The client is `Send + Sync` and cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which
    /// only happens when TLS initialization itself fails.
    #[must_use]
    pub fn new(config: &BmConfig) -> Self {
        let prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |p| format!("{p} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{prefix}BM Parts API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.base_uri().to_string(),
            default_headers,
        }
    }

    /// Base URI requests are joined onto.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Headers applied to every request before per-request extras.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request, retrying 429 and 500 responses up to the
    /// request's attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`]:
    /// - `InvalidRequest` when the request fails [`HttpRequest::verify`]
    /// - `Network` for connection and protocol failures
    /// - `Response` for a non-retryable or single-attempt failure status
    /// - `MaxRetries` when a raised attempt budget is exhausted
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        // Endpoint paths may or may not carry a leading slash
        let url = format!("{}/{}", self.base_uri, request.path.trim_start_matches('/'));
        let headers = self.merge_headers(&request);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let response = self.send_once(&request, &url, &headers).await?;
            if response.is_ok() {
                return Ok(response);
            }

            let message = Self::serialize_error(&response);
            let reference = response.request_id().map(String::from);
            let retryable = response.code == 429 || response.code == 500;

            if !retryable {
                return Err(HttpError::Response(HttpResponseError {
                    code: response.code,
                    message,
                    error_reference: reference,
                }));
            }

            if attempt >= request.tries {
                // A default budget of one attempt reads as a plain
                // response failure, not an exhausted retry loop
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code: response.code,
                        message,
                        error_reference: reference,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code: response.code,
                    tries: request.tries,
                    message,
                    error_reference: reference,
                }));
            }

            tracing::debug!(
                "Retrying {} after status {} (attempt {attempt} of {})",
                request.path,
                response.code,
                request.tries
            );
            tokio::time::sleep(Self::retry_delay(&response)).await;
        }
    }

    /// Combines default headers with the request's content type and
    /// extra headers.
    fn merge_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        headers
    }

    /// Performs a single attempt and parses the response.
    async fn send_once(
        &self,
        request: &HttpRequest,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::collect_headers(res.headers());
        let text = res.text().await.unwrap_or_default();
        let body = Self::parse_body(&text, code);

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Lowercases header names and groups repeated values.
    fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut collected: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            collected
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value.to_str().unwrap_or_default().to_string());
        }
        collected
    }

    /// Parses a response body as JSON, keeping the raw text for 5xx
    /// bodies that are not JSON at all.
    fn parse_body(text: &str, code: u16) -> serde_json::Value {
        if text.is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| {
            if code >= 500 {
                serde_json::json!({ "raw_body": text })
            } else {
                serde_json::json!({})
            }
        })
    }

    /// Delay before the next attempt. 429 honors `Retry-After`; 500
    /// always uses the fixed fallback.
    fn retry_delay(response: &HttpResponse) -> Duration {
        if response.code == 429 {
            if let Some(seconds) = response.retry_request_after {
                return Duration::from_secs_f64(seconds);
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Renders the API's error payload as a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
