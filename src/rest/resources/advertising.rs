//! Advertising resources: banners, promo listings, and promo progress.

use crate::clients::HttpResponse;
use crate::rest::client::BmClient;
use crate::rest::endpoint::{DocsRef, Endpoint};
use crate::rest::errors::ApiError;
use crate::rest::params::Options;

const BASE: &str = "/advertising";
const DOCS_BASE: &str = "/advertising";

const BANNER_RANDOM: Endpoint = Endpoint::get(
    BASE,
    &["/banner/random"],
    &[],
    DocsRef::new(DOCS_BASE, "get-advertising-banner-random"),
);

const BANNERS_LIST: Endpoint = Endpoint::get(
    BASE,
    &["/banners"],
    &[],
    DocsRef::new(DOCS_BASE, "get-advertising-banners"),
);

const LIST: Endpoint = Endpoint::get(
    BASE,
    &["/list"],
    &[],
    DocsRef::new(DOCS_BASE, "get-advertising-list"),
);

const PROGRESS: Endpoint = Endpoint::get(
    BASE,
    &["/promo/{promo_uuid}/progress"],
    &["promo_uuid"],
    DocsRef::new(DOCS_BASE, "get-advertising-promo-promo-uuid-progress"),
);

const PROMO: Endpoint = Endpoint::get(
    BASE,
    &["/promo/{promo_uuid}"],
    &["promo_uuid", "public"],
    DocsRef::new(DOCS_BASE, "get-advertising-promo-promo-uuid"),
);

/// Advertising resource group.
///
/// Obtained from [`BmClient::advertising`].
#[derive(Clone, Copy, Debug)]
pub struct Advertising<'a> {
    client: &'a BmClient,
}

impl<'a> Advertising<'a> {
    pub(crate) const fn new(client: &'a BmClient) -> Self {
        Self { client }
    }

    /// Fetches a random advertising banner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn banner_random(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&BANNER_RANDOM, options).await
    }

    /// Lists all advertising banners.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn banners_list(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&BANNERS_LIST, options).await
    }

    /// Lists advertising campaigns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&LIST, options).await
    }

    /// Fetches progress for a promo campaign.
    ///
    /// Requires `promo_uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `promo_uuid` is absent,
    /// or an HTTP error if the request fails.
    pub async fn progress(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&PROGRESS, options).await
    }

    /// Fetches details for a promo campaign.
    ///
    /// Requires `promo_uuid` and `public`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn promo(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&PROMO, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    #[test]
    fn test_endpoints_use_get() {
        for endpoint in [&BANNER_RANDOM, &BANNERS_LIST, &LIST, &PROGRESS, &PROMO] {
            assert_eq!(endpoint.method, HttpMethod::Get);
            assert_eq!(endpoint.base, "/advertising");
        }
    }

    #[test]
    fn test_promo_requires_uuid_and_public() {
        assert_eq!(PROMO.required, &["promo_uuid", "public"]);
    }

    #[test]
    fn test_progress_path() {
        let options = Options::new().with("promo_uuid", "p-42");
        assert_eq!(
            PROGRESS.resolve(&options).unwrap(),
            "/advertising/promo/p-42/progress"
        );
    }

    #[test]
    fn test_promo_docs_reference() {
        assert_eq!(
            PROMO.docs.to_string(),
            "/advertising#get-advertising-promo-promo-uuid"
        );
    }
}
