//! REST client layer for the BM Parts API.
//!
//! This module ties the HTTP layer to the API's resource groups:
//!
//! - [`BmClient`]: The REST client owning the HTTP layer
//! - [`Options`]: Named parameter bag passed to every resource method
//! - [`Endpoint`] / [`DocsRef`]: Const descriptors backing each method
//! - [`ApiError`]: Validation and HTTP errors
//!
//! Resource groups live in [`resources`] and are reached through the
//! client's accessors.
//!
//! # Example
//!
//! ```rust,ignore
//! use bmparts_api::{BmClient, BmConfig, ApiToken, Options};
//!
//! let config = BmConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = BmClient::new(&config);
//!
//! let progress = client
//!     .advertising()
//!     .progress(&Options::new().with("promo_uuid", "abc-123"))
//!     .await?;
//! ```

mod client;
mod endpoint;
mod errors;
mod params;
pub mod resources;

pub use client::BmClient;
pub use endpoint::{DocsRef, Endpoint};
pub use errors::ApiError;
pub use params::{require_params, Options};
