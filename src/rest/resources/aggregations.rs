//! Product search aggregations: advertisements, brands, catalog nodes,
//! and car/model facets.

use crate::clients::HttpResponse;
use crate::rest::client::BmClient;
use crate::rest::endpoint::{DocsRef, Endpoint};
use crate::rest::errors::ApiError;
use crate::rest::params::Options;

// The remote service mounts this group without a leading slash segment of
// its own; the path is joined onto the host directly.
const BASE: &str = "search/products/aggregations";
const DOCS_BASE: &str = "search_products";

const ADVERTISEMENTS: Endpoint = Endpoint::get(
    BASE,
    &["/advertisements"],
    &[],
    DocsRef::new(DOCS_BASE, "get-search-products-aggregations-advertisements"),
);

const BRANDS: Endpoint = Endpoint::get(
    BASE,
    &["/brands"],
    &[],
    DocsRef::new(DOCS_BASE, "get-search-products-aggregations-brands"),
);

const NODES: Endpoint = Endpoint::get(
    BASE,
    &["/nodes"],
    &[],
    DocsRef::new(DOCS_BASE, "get-search-products-aggregations-nodes"),
);

const CARS: Endpoint = Endpoint::get(
    BASE,
    &["/cars"],
    &[],
    DocsRef::new(DOCS_BASE, "get-search-products-aggregations-cars"),
);

const MODELS: Endpoint = Endpoint::get(
    BASE,
    &["/car/{car_name}/models"],
    &["car_name"],
    DocsRef::new(
        DOCS_BASE,
        "get-search-products-aggregations-car-string-car-name-models",
    ),
);

const ENGINES: Endpoint = Endpoint::get(
    BASE,
    &["/car/{car_name}/model/{model_name}"],
    &["car_name", "model_name"],
    DocsRef::new(
        DOCS_BASE,
        "get-search-products-aggregations-car-string-car-name-model-string-model-name",
    ),
);

/// Product aggregations resource group.
///
/// Obtained from [`BmClient::aggregations`].
#[derive(Clone, Copy, Debug)]
pub struct Aggregations<'a> {
    client: &'a BmClient,
}

impl<'a> Aggregations<'a> {
    pub(crate) const fn new(client: &'a BmClient) -> Self {
        Self { client }
    }

    /// Fetches advertisement aggregations for product search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn advertisements(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&ADVERTISEMENTS, options).await
    }

    /// Fetches brand aggregations for product search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn brands(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&BRANDS, options).await
    }

    /// Fetches catalog node aggregations for product search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn nodes(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&NODES, options).await
    }

    /// Fetches car aggregations for product search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cars(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&CARS, options).await
    }

    /// Fetches model aggregations for a car.
    ///
    /// Requires `car_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `car_name` is absent,
    /// or an HTTP error if the request fails.
    pub async fn models(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&MODELS, options).await
    }

    /// Fetches engine aggregations for a car model.
    ///
    /// Requires `car_name` and `model_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn engines(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&ENGINES, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_no_leading_slash() {
        assert_eq!(BRANDS.base, "search/products/aggregations");
    }

    #[test]
    fn test_models_path() {
        let options = Options::new().with("car_name", "passat");
        assert_eq!(
            MODELS.resolve(&options).unwrap(),
            "search/products/aggregations/car/passat/models"
        );
    }

    #[test]
    fn test_engines_requires_both_names() {
        let err = ENGINES
            .resolve(&Options::new().with("car_name", "passat"))
            .unwrap_err();
        assert_eq!(err.missing_params(), Some(&["model_name"][..]));
    }

    #[test]
    fn test_engines_path() {
        let options = Options::new()
            .with("car_name", "passat")
            .with("model_name", "b6");
        assert_eq!(
            ENGINES.resolve(&options).unwrap(),
            "search/products/aggregations/car/passat/model/b6"
        );
    }
}
