//! Parsed response type returned by [`HttpClient`](super::HttpClient).

use std::collections::HashMap;

/// A parsed API response: status, headers, JSON body, and the retry hint
/// extracted from `Retry-After` when the server sent one.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Headers with lowercased names; repeated headers keep all values.
    pub headers: HashMap<String, Vec<String>>,
    /// JSON body, `{}` when the body was empty or unparseable.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying, from `Retry-After`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Builds a response, extracting the `Retry-After` hint if present
    /// and numeric.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// The `X-Request-Id` reported by the server, useful when filing
    /// error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
