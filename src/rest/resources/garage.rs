//! Garage resources: the customer's saved cars.

use crate::clients::HttpResponse;
use crate::rest::client::BmClient;
use crate::rest::endpoint::{DocsRef, Endpoint};
use crate::rest::errors::ApiError;
use crate::rest::params::Options;

const BASE: &str = "/garage";
const DOCS_BASE: &str = "/garage";

const CARS_LIST: Endpoint = Endpoint::get(
    BASE,
    &["/cars"],
    &[],
    DocsRef::new(DOCS_BASE, "get-garage-cars"),
);

const ADD_CAR: Endpoint = Endpoint::post(
    BASE,
    &["/car"],
    &["searched_at", "search_string", "name"],
    DocsRef::new(DOCS_BASE, "post-garage-car"),
);

const CAR_INFO: Endpoint = Endpoint::get(
    BASE,
    &["/car/{car_uuid}"],
    &["car_uuid"],
    DocsRef::new(DOCS_BASE, "get-garage-car-string-car-uuid"),
);

const UPDATE_CAR: Endpoint = Endpoint::post(
    BASE,
    &["/car/{car_uuid}"],
    &["car_uuid", "name"],
    DocsRef::new(DOCS_BASE, "post-garage-car-string-car-uuid"),
);

const DELETE_CAR: Endpoint = Endpoint::delete(
    BASE,
    &["/car/{car_uuid}"],
    &["car_uuid"],
    DocsRef::new(DOCS_BASE, "delete-garage-car-string-car-uuid"),
);

/// Garage resource group.
///
/// Obtained from [`BmClient::garage`].
#[derive(Clone, Copy, Debug)]
pub struct Garage<'a> {
    client: &'a BmClient,
}

impl<'a> Garage<'a> {
    pub(crate) const fn new(client: &'a BmClient) -> Self {
        Self { client }
    }

    /// Lists the cars saved in the garage.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cars_list(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&CARS_LIST, options).await
    }

    /// Adds a car to the garage.
    ///
    /// Requires `searched_at`, `search_string`, and `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn add_car(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&ADD_CAR, options).await
    }

    /// Fetches details for a saved car.
    ///
    /// Requires `car_uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `car_uuid` is absent,
    /// or an HTTP error if the request fails.
    pub async fn car_info(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&CAR_INFO, options).await
    }

    /// Updates a saved car.
    ///
    /// Requires `car_uuid` and `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if required parameters are
    /// absent, or an HTTP error if the request fails.
    pub async fn update_car(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&UPDATE_CAR, options).await
    }

    /// Removes a car from the garage.
    ///
    /// Requires `car_uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] if `car_uuid` is absent,
    /// or an HTTP error if the request fails.
    pub async fn delete_car(&self, options: &Options) -> Result<HttpResponse, ApiError> {
        self.client.dispatch(&DELETE_CAR, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    #[test]
    fn test_add_car_required_parameters() {
        assert_eq!(ADD_CAR.required, &["searched_at", "search_string", "name"]);
        assert_eq!(ADD_CAR.method, HttpMethod::Post);
    }

    #[test]
    fn test_update_and_delete_share_path_template() {
        let options = Options::new().with("car_uuid", "c-7").with("name", "Wagon");

        assert_eq!(UPDATE_CAR.resolve(&options).unwrap(), "/garage/car/c-7");
        assert_eq!(DELETE_CAR.resolve(&options).unwrap(), "/garage/car/c-7");
        assert_eq!(UPDATE_CAR.method, HttpMethod::Post);
        assert_eq!(DELETE_CAR.method, HttpMethod::Delete);
    }

    #[test]
    fn test_delete_car_docs_anchor_matches_method() {
        assert_eq!(DELETE_CAR.docs.anchor, "delete-garage-car-string-car-uuid");
    }

    #[test]
    fn test_add_car_missing_name_only() {
        let options = Options::new()
            .with("searched_at", "2024-01-01")
            .with("search_string", "passat b6");

        let err = ADD_CAR.resolve(&options).unwrap_err();
        assert_eq!(err.missing_params(), Some(&["name"][..]));
    }
}
