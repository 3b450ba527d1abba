//! Provider abstraction for the dashboard backend.
//!
//! [`SeriesProvider`] is the seam between the comparison session and
//! whatever actually serves catalog and series data. The production
//! implementation is [`dashboard_rest::DashboardProvider`]; tests drive
//! sessions with hand-rolled doubles.
//!
//! The trait is object safe so callers can hold a `Box<dyn SeriesProvider>`
//! and pick the implementation at runtime.

pub mod dashboard_rest;
pub mod errors;

use async_trait::async_trait;

use crate::{
    models::{catalog::SymbolCatalog, request_params::SeriesRequestParams, series::SeriesResult},
    providers::errors::ProviderError,
};

#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetches the full grouped symbol catalog. Called once per session.
    async fn fetch_catalog(&self) -> Result<SymbolCatalog, ProviderError>;

    /// Fetches close series for every item in `params` over the date range.
    ///
    /// A symbol with no data in the range may be absent from the result or
    /// mapped to an empty series; that is not an error.
    async fn fetch_series(&self, params: SeriesRequestParams)
    -> Result<SeriesResult, ProviderError>;
}
