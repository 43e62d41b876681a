//! Error types for REST resource operations.

use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::endpoint::DocsRef;

/// Errors returned by resource methods.
///
/// Parameter validation failures are reported before any network traffic
/// happens; everything that goes wrong on the wire surfaces as the
/// wrapped [`HttpError`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more required parameters were absent from the call.
    #[error("missing required parameters {missing:?} (see {docs})")]
    MissingParameters {
        /// Names of the absent parameters, in declaration order.
        missing: Vec<&'static str>,
        /// Documentation reference for the endpoint.
        docs: DocsRef,
    },

    /// The HTTP layer failed: network error, non-2xx response, or
    /// exhausted retries.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Returns the missing parameter names if this is a validation error.
    #[must_use]
    pub fn missing_params(&self) -> Option<&[&'static str]> {
        match self {
            Self::MissingParameters { missing, .. } => Some(missing),
            Self::Http(_) => None,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_parameters_message_names_docs() {
        let err = ApiError::MissingParameters {
            missing: vec!["promo_uuid", "public"],
            docs: DocsRef::new("/advertising", "get-advertising-promo-promo-uuid"),
        };

        let msg = err.to_string();
        assert!(msg.contains("promo_uuid"));
        assert!(msg.contains("public"));
        assert!(msg.contains("/advertising#get-advertising-promo-promo-uuid"));
    }

    #[test]
    fn test_missing_params_accessor() {
        let err = ApiError::MissingParameters {
            missing: vec!["name"],
            docs: DocsRef::new("/garage", "post-garage-car"),
        };

        assert_eq!(err.missing_params(), Some(&["name"][..]));
    }

    #[test]
    fn test_http_error_passes_through() {
        let http: HttpError = HttpResponseError {
            code: 404,
            message: "not found".to_string(),
            error_reference: None,
        }
        .into();
        let err = ApiError::from(http);

        assert!(err.missing_params().is_none());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_source_chain_reaches_http_error() {
        use std::error::Error as _;

        let http: HttpError = HttpResponseError {
            code: 500,
            message: "server error".to_string(),
            error_reference: None,
        }
        .into();
        let err = ApiError::from(http);

        // transparent wrapping keeps the HTTP error as the displayed error
        assert!(err.source().is_some() || err.to_string().contains("500"));
    }
}
