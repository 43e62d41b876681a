//! Request description types consumed by [`HttpClient`](super::HttpClient).

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the BM Parts API.
///
/// The API exposes only these three; there are no PUT or PATCH routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Retrieval; options travel as query parameters.
    Get,
    /// Creation and updates; options travel as a JSON body.
    Post,
    /// Removal; options travel as query parameters.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Body content type, mapped to the `Content-Type` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`, the only body format the API accepts.
    Json,
}

impl DataType {
    /// MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// A fully described request, ready to be sent by the HTTP client.
///
/// Construct via [`HttpRequest::builder`]; `build()` runs [`verify`]
/// so an invalid combination never reaches the wire.
///
/// [`verify`]: HttpRequest::verify
///
/// # Example
///
/// ```rust
/// use bmparts_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "/advertising/banners")
///     .build()
///     .unwrap();
/// assert!(get.body.is_none());
///
/// let post = HttpRequest::builder(HttpMethod::Post, "/garage/car")
///     .body(json!({"name": "My car", "search_string": "passat b6"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert_eq!(post.tries, 1);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Method for this request.
    pub http_method: HttpMethod,
    /// Path relative to the client's base URI.
    pub path: String,
    /// JSON body, when the method carries one.
    pub body: Option<serde_json::Value>,
    /// Content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters appended to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Headers added on top of the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Attempt budget; 1 means no retries.
    pub tries: u32,
}

impl HttpRequest {
    /// Starts a builder for the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
            tries: 1,
        }
    }

    /// Checks internal consistency before the request is sent.
    ///
    /// # Errors
    ///
    /// - [`InvalidHttpRequestError::MissingBodyType`] when a body is set
    ///   without a content type
    /// - [`InvalidHttpRequestError::MissingBody`] when a POST has no body
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Fluent builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    /// Sets the JSON body. Pair with [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the body content type.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Replaces the query parameter map.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replaces the extra header map.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds one extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the attempt budget. Values above 1 enable automatic retries
    /// for 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Finishes the builder, running [`HttpRequest::verify`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] when the request is
    /// inconsistent.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_json_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
    }

    #[test]
    fn test_get_request_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "/documents/list")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/documents/list");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_post_request_with_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/garage/car")
            .body(json!({"name": "Daily driver"}))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        assert!(request.body.is_some());
        assert_eq!(request.body_type, Some(DataType::Json));
    }

    #[test]
    fn test_post_without_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, "/garage/car").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_body_without_content_type_is_rejected() {
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: "/garage/car".to_string(),
            body: Some(json!({})),
            body_type: None,
            query: None,
            extra_headers: None,
            tries: 1,
        };

        assert!(matches!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_delete_needs_no_body() {
        let request = HttpRequest::builder(HttpMethod::Delete, "/garage/car/abc")
            .build()
            .unwrap();

        assert!(request.body.is_none());
    }

    #[test]
    fn test_query_params_and_headers_accumulate() {
        let request = HttpRequest::builder(HttpMethod::Get, "/documents/list")
            .query_param("period", "month")
            .query_param("type", "all")
            .header("X-Custom", "value")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("period").map(String::as_str), Some("month"));
        assert_eq!(query.get("type").map(String::as_str), Some("all"));
        assert_eq!(
            request
                .extra_headers
                .unwrap()
                .get("X-Custom")
                .map(String::as_str),
            Some("value")
        );
    }

    #[test]
    fn test_tries_can_be_raised() {
        let request = HttpRequest::builder(HttpMethod::Get, "/documents/list")
            .tries(3)
            .build()
            .unwrap();

        assert_eq!(request.tries, 3);
    }
}
