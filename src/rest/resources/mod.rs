//! Resource groups exposed by the BM Parts API.
//!
//! Each group is a thin borrowing view over [`BmClient`](crate::rest::BmClient)
//! with one async method per endpoint. Methods accept an
//! [`Options`](crate::rest::Options) bag, validate required parameters,
//! and return the raw [`HttpResponse`](crate::clients::HttpResponse).

mod advertising;
mod aggregations;
mod documents;
mod garage;
mod processing;

pub use advertising::Advertising;
pub use aggregations::Aggregations;
pub use documents::Documents;
pub use garage::Garage;
pub use processing::Processing;
