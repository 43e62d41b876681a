//! # BM Parts API Rust SDK
//!
//! A Rust SDK for the BM Parts e-commerce REST API, providing type-safe
//! configuration and an async client covering advertising, product
//! aggregations, documents, garage, and order processing endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`BmConfig`] and [`BmConfigBuilder`]
//! - Validated newtypes for the API token and host URL
//! - Async HTTP client with retry logic for rate limits and server errors
//! - Resource methods that validate required parameters before any
//!   network traffic, reporting every missing name at once
//!
//! ## Quick Start
//!
//! ```rust
//! use bmparts_api::{BmConfig, BmClient, ApiToken};
//!
//! // Create configuration using the builder pattern
//! let config = BmConfig::builder()
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = BmClient::new(&config);
//! ```
//!
//! ## Making API Requests
//!
//! Resource methods take an [`Options`] bag of named parameters. Values
//! named in the endpoint's path are interpolated into the URL; the rest
//! travel as query parameters (GET, DELETE) or the JSON body (POST):
//!
//! ```rust,ignore
//! use bmparts_api::{BmClient, BmConfig, ApiToken, Options};
//!
//! let config = BmConfig::builder()
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = BmClient::new(&config);
//!
//! // GET /advertising/promo/{promo_uuid}/progress
//! let progress = client
//!     .advertising()
//!     .progress(&Options::new().with("promo_uuid", "abc-123"))
//!     .await?;
//!
//! // POST /garage/car
//! let car = client
//!     .garage()
//!     .add_car(
//!         &Options::new()
//!             .with("searched_at", "2024-05-01")
//!             .with("search_string", "passat b6")
//!             .with("name", "Daily driver"),
//!     )
//!     .await?;
//! ```
//!
//! ## Parameter Validation
//!
//! A call missing required parameters fails before the request is sent,
//! with an error naming every absent parameter and a link into the API
//! documentation:
//!
//! ```rust,ignore
//! use bmparts_api::{ApiError, Options};
//!
//! let err = client.garage().add_car(&Options::new()).await.unwrap_err();
//! match err {
//!     ApiError::MissingParameters { missing, docs } => {
//!         assert_eq!(missing, vec!["searched_at", "search_string", "name"]);
//!         println!("see {docs}");
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and parameters validate before I/O
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ApiToken, BmConfig, BmConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export REST client types
pub use rest::{ApiError, BmClient, DocsRef, Endpoint, Options};
