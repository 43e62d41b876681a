//! Error types for HTTP client operations.

use thiserror::Error;

/// Errors that can occur during HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server responded with a non-success status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// All retry attempts were exhausted without a success response.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// The request was malformed and could not be sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// An underlying network or protocol error occurred.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Error returned when the server responds with a non-success status code.
#[derive(Debug, Error)]
#[error("HTTP response error (code {code}): {message}")]
pub struct HttpResponseError {
    /// HTTP status code of the response.
    pub code: u16,
    /// Response body, typically a JSON error payload from the API.
    pub message: String,
    /// Request id reported by the server, when present.
    pub error_reference: Option<String>,
}

/// Error returned when the configured number of retries is exhausted.
#[derive(Debug, Error)]
#[error("max retries ({tries}) exceeded, last response (code {code}): {message}")]
pub struct MaxHttpRetriesExceededError {
    /// HTTP status code of the final failed attempt.
    pub code: u16,
    /// How many attempts were made.
    pub tries: u32,
    /// Response body of the final failed attempt.
    pub message: String,
    /// Request id reported by the server, when present.
    pub error_reference: Option<String>,
}

/// Errors produced when an [`HttpRequest`](crate::clients::HttpRequest)
/// fails validation before being sent.
#[derive(Debug, Error)]
pub enum InvalidHttpRequestError {
    /// A request body was supplied without a content type.
    #[error("request has a body but no body type is set")]
    MissingBodyType,

    /// A method that requires a body was used without one.
    #[error("{method} requests require a body")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message() {
        let err = HttpResponseError {
            code: 404,
            message: "{\"error\":\"not found\"}".to_string(),
            error_reference: None,
        };

        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_max_retries_error_message() {
        let err = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "rate limited".to_string(),
            error_reference: Some("req-abc".to_string()),
        };

        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_invalid_request_error_variants() {
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "request has a body but no body type is set"
        );
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "post".to_string()
            }
            .to_string(),
            "post requests require a body"
        );
    }

    #[test]
    fn test_http_error_wraps_sources() {
        let err: HttpError = HttpResponseError {
            code: 500,
            message: "server error".to_string(),
            error_reference: None,
        }
        .into();

        assert!(matches!(err, HttpError::Response(_)));
        assert!(err.to_string().contains("500"));
    }
}
