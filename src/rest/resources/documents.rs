//! Account documents: filters, listings, reclamations, and downloads.

use crate::clients::HttpResponse;
use crate::rest::client::BmClient;
use crate::rest::endpoint::{DocsRef, Endpoint};
use crate::rest::errors::ApiError;
use crate::rest::params::Options;

const BASE: &str = "/documents";
const DOCS_BASE: &str = "/documents";

const FILTER_GROUPS: Endpoint = Endpoint::get(
    BASE,
    &["/filters/groups"],
    &[],
    DocsRef::new(DOCS_BASE, "get-documents-filters-groups"),
);

const FILTER_TYPES: Endpoint = Endpoint::get(
    BASE,
    &["/filters/types"],
    &[],
    DocsRef::new(DOCS_BASE, "get-documents-filters-types"),
);

const FILTER_DATES: Endpoint = Endpoint::get(
    BASE,
    &["/filters/dates"],
    &[],
    DocsRef::new(DOCS_BASE, "get-documents-filters-dates"),
);

const GROUPED: Endpoint = Endpoint::get(
    BASE,
    &["/grouped"],
    &[],
    DocsRef::new(DOCS_BASE, "get-documents-grouped"),
);

const LIST: Endpoint = Endpoint::get(
    BASE,
    &["/list"],
    &[],
    DocsRef::new(DOCS_BASE, "get-documents-list"),
);

const RECLAMATION_STATUS: Endpoint = Endpoint::get(
    BASE,
    &["/reclamation/{act_uuid}"],
    &["act_uuid"],
    DocsRef::new(DOCS_BASE, "get-documents-reclamation-string-act-uuid"),
);

const DOWNLOAD: Endpoint = Endpoint::get(
    BASE,
    &["/download/{type}/{uuid}/{file_type}"],
    &["type", "uuid", "file_type"],
    DocsRef::new(
        DOCS_BASE,
        "get-documents-download-string-type-string-uuid-string-file-type",
    ),
);

// The remote route concatenates type and uuid with no separator.
const GET_DOCUMENT: Endpoint = Endpoint::get(
    BASE,
    &["/{type}{uuid}/"],
    &["type", "uuid"],
    DocsRef::new(DOCS_BASE, "get-documents-string-type-string-uuid"),
);

/// Documents resource group.
///
/// Obtained from [`BmClient::documents`].
#[derive(Clone, Copy, Debug)]
pub struct Documents<'a> {
    client: &'a BmClient,
}

impl<'a> Documents<'a> {
    pub(crate) const fn new(client: &'a BmClient) -> Self {
        Self { client }
    }

    /// Fetches the available document group filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn filter_groups(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&FILTER_GROUPS, options).await
    }

    /// Fetches the available document type filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn filter_types(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&FILTER_TYPES, options).await
    }

    /// Fetches the available document date filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn filter_dates(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&FILTER_DATES, options).await
    }

    /// Fetches documents grouped by type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn grouped(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&GROUPED, options).await
    }

    /// Lists documents.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&LIST, options).await
    }

    /// Fetches the status of a reclamation act.
    ///
    /// Requires `act_uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `act_uuid` is absent,
    /// or an HTTP error if the request fails.
    pub async fn reclamation_status(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&RECLAMATION_STATUS, options).await
    }

    /// Downloads a document in the given file format.
    ///
    /// Requires `type`, `uuid`, and `file_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn download(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&DOWNLOAD, options).await
    }

    /// Fetches a single document by type and uuid.
    ///
    /// Requires `type` and `uuid`. The two values are joined without a
    /// separator, matching the remote route.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn get_document(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&GET_DOCUMENT, options).await
    }
}
