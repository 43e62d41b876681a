//! Order processing: reserves, synchronization, departures, and shipment
//! tracking.

use crate::clients::HttpResponse;
use crate::rest::client::BmClient;
use crate::rest::endpoint::{DocsRef, Endpoint};
use crate::rest::errors::ApiError;
use crate::rest::params::Options;

const BASE: &str = "/processing";
const DOCS_BASE: &str = "/processing";

const RESERVE_PROCESS: Endpoint = Endpoint::post(
    BASE,
    &["/reserve/process"],
    &[
        "orders_array",
        "delivery_config",
        "warehouse",
        "key",
        "expired_at",
        "route_code",
        "route_at",
        "departure_at",
        "comment",
    ],
    DocsRef::new(DOCS_BASE, "post-processing-reserve-process"),
);

const DEPARTURES: Endpoint = Endpoint::get(
    BASE,
    &["/departures"],
    &["delivery_config", "warehouse"],
    DocsRef::new(DOCS_BASE, "get-processing-departures"),
);

const PROCESS_SYNC: Endpoint = Endpoint::post(
    BASE,
    &["/sync"],
    &[
        "cart",
        "delivery_config",
        "warehouse",
        "key",
        "expired_at",
        "route_code",
        "route_at",
        "departure_at",
        "comment",
        "save_unprocessed",
    ],
    DocsRef::new(DOCS_BASE, "post-processing-sync"),
);

// task_id is optional; without it the endpoint returns the latest export.
const DOWNLOAD_UNSHIPPED: Endpoint = Endpoint::get(
    BASE,
    &["/download/unshipped/{task_id}", "/download/unshipped"],
    &[],
    DocsRef::new(DOCS_BASE, "excel"),
);

const CART_PRE_CHECK: Endpoint = Endpoint::get(
    BASE,
    &["/cart/{cart_uuid}/pre_check"],
    &["cart_uuid"],
    DocsRef::new(DOCS_BASE, "get-processing-cart-string-cart-uuid-pre-check"),
);

const SHIPMENT_STATUS: Endpoint = Endpoint::get(
    BASE,
    &["/shipment/{task_id}"],
    &["task_id"],
    DocsRef::new(DOCS_BASE, "get-processing-shipment-task-id"),
);

/// Order processing resource group.
///
/// Obtained from [`BmClient::processing`].
#[derive(Clone, Copy, Debug)]
pub struct Processing<'a> {
    client: &'a BmClient,
}

impl<'a> Processing<'a> {
    pub(crate) const fn new(client: &'a BmClient) -> Self {
        Self { client }
    }

    /// Processes a set of reserve orders into shipments.
    ///
    /// Requires the full reserve configuration: `orders_array`,
    /// `delivery_config`, `warehouse`, `key`, `expired_at`, `route_code`,
    /// `route_at`, `departure_at`, and `comment`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn reserve_process(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&RESERVE_PROCESS, options).await
    }

    /// Fetches available departures for a delivery configuration.
    ///
    /// Requires `delivery_config` and `warehouse`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn departures(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&DEPARTURES, options).await
    }

    /// Synchronizes a cart into an order.
    ///
    /// Requires the full sync configuration: `cart`, `delivery_config`,
    /// `warehouse`, `key`, `expired_at`, `route_code`, `route_at`,
    /// `departure_at`, `comment`, and `save_unprocessed`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn process_sync(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&PROCESS_SYNC, options).await
    }

    /// Downloads the unshipped products export.
    ///
    /// Accepts an optional `task_id` to fetch a specific export run.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn download_unshipped(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&DOWNLOAD_UNSHIPPED, options).await
    }

    /// Pre-checks a cart before processing.
    ///
    /// Requires `cart_uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `cart_uuid` is absent,
    /// or an HTTP error if the request fails.
    pub async fn cart_pre_check(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&CART_PRE_CHECK, options).await
    }

    /// Checks the status of a shipment task.
    ///
    /// Requires `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `task_id` is absent,
    /// or an HTTP error if the request fails.
    pub async fn shipment_status(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&SHIPMENT_STATUS, options).await
    }
}
