//! REST client for the BM Parts API.
//!
//! [`BmClient`] owns the HTTP layer and exposes the resource groups as
//! borrowing accessors. Resource methods validate their parameters, build
//! the request path from an endpoint descriptor, and dispatch through the
//! shared [`HttpClient`].

use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::BmConfig;
use crate::rest::endpoint::Endpoint;
use crate::rest::errors::ApiError;
use crate::rest::params::Options;
use crate::rest::resources::{Advertising, Aggregations, Documents, Garage, Processing};

/// Client for the BM Parts REST API.
///
/// # Example
///
/// ```rust,ignore
/// use bmparts_api::{BmClient, BmConfig, ApiToken, Options};
///
/// let config = BmConfig::builder()
///     .token(ApiToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = BmClient::new(&config);
///
/// let banners = client.advertising().banners_list(&Options::new()).await?;
/// println!("{}", banners.body);
/// ```
#[derive(Debug)]
pub struct BmClient {
    http: HttpClient,
}

// Verify BmClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BmClient>();
};

impl BmClient {
    /// Creates a new REST client from the given configuration.
    #[must_use]
    pub fn new(config: &BmConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Returns the advertising resource group.
    #[must_use]
    pub const fn advertising(&self) -> Advertising<'_> {
        Advertising::new(self)
    }

    /// Returns the product aggregations resource group.
    #[must_use]
    pub const fn aggregations(&self) -> Aggregations<'_> {
        Aggregations::new(self)
    }

    /// Returns the documents resource group.
    #[must_use]
    pub const fn documents(&self) -> Documents<'_> {
        Documents::new(self)
    }

    /// Returns the garage resource group.
    #[must_use]
    pub const fn garage(&self) -> Garage<'_> {
        Garage::new(self)
    }

    /// Returns the order processing resource group.
    #[must_use]
    pub const fn processing(&self) -> Processing<'_> {
        Processing::new(self)
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Resolves an endpoint against the options and sends the request.
    ///
    /// GET and DELETE requests carry the options as query parameters;
    /// POST requests send them as a JSON body.
    pub(crate) async fn dispatch(
        &self,
        endpoint: &Endpoint,
        options: &Options,
    ) -> Result<HttpResponse, ApiError> {
        let path = endpoint.resolve(options)?;

        let request = match endpoint.method {
            HttpMethod::Get | HttpMethod::Delete => {
                HttpRequest::builder(endpoint.method, path)
                    .query(options.to_query())
                    .build()
            }
            HttpMethod::Post => HttpRequest::builder(endpoint.method, path)
                .body(options.to_body())
                .body_type(DataType::Json)
                .build(),
        }
        .map_err(crate::clients::HttpError::from)?;

        let response = self.http.request(request).await?;
        Ok(response)
    }
}
