//! Configuration types for the BM Parts API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with BM Parts.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BmConfig`]: The main configuration struct holding all SDK settings
//! - [`BmConfigBuilder`]: A builder for constructing [`BmConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`ApiHost`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use bmparts_api::{BmConfig, ApiToken};
//!
//! let config = BmConfig::builder()
//!     .token(ApiToken::new("my-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiHost, ApiToken};

use crate::error::ConfigError;

/// Default API host used when none is configured.
pub const DEFAULT_API_HOST: &str = "https://api.bm.parts";

/// Configuration for the BM Parts API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// token, an optional host override, and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `BmConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use bmparts_api::{BmConfig, ApiToken, ApiHost};
///
/// let config = BmConfig::builder()
///     .token(ApiToken::new("my-api-token").unwrap())
///     .host(ApiHost::new("https://api.bm.parts").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct BmConfig {
    token: ApiToken,
    host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
}

impl BmConfig {
    /// Creates a new builder for constructing a `BmConfig`.
    #[must_use]
    pub fn builder() -> BmConfigBuilder {
        BmConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the host URL override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&ApiHost> {
        self.host.as_ref()
    }

    /// Returns the base URI for API requests.
    ///
    /// This is the configured host, or [`DEFAULT_API_HOST`] if none is set.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.host.as_ref().map_or(DEFAULT_API_HOST, AsRef::as_ref)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BmConfig>();
};

/// Builder for constructing [`BmConfig`] instances.
///
/// The only required field is `token`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `host`: `None` (requests go to [`DEFAULT_API_HOST`])
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use bmparts_api::{BmConfig, ApiToken};
///
/// let config = BmConfig::builder()
///     .token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct BmConfigBuilder {
    token: Option<ApiToken>,
    host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
}

impl BmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API host, overriding the default.
    ///
    /// Useful for pointing the client at a proxy or a local mock server
    /// in tests.
    #[must_use]
    pub fn host(mut self, host: ApiHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BmConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<BmConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(BmConfig {
            token,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
