use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use tracing::warn;

use crate::{
    config::ClientConfig,
    models::{
        catalog::SymbolCatalog,
        category::Category,
        request_params::SeriesRequestParams,
        series::{SeriesPoint, SeriesResult},
    },
    providers::{
        SeriesProvider,
        dashboard_rest::{
            params::{construct_params, validate_items},
            response::{CatalogResponse, SeriesResponse},
        },
        errors::{ProviderError, ProviderInitError},
    },
};

/// Environment variable holding the backend base URL, e.g.
/// `http://localhost:5000`.
pub const BASE_URL_VAR: &str = "DASHBOARD_API_URL";

/// REST client for the dashboard backend.
///
/// One plain GET per operation: no retries, no timeout, no in-flight
/// deduplication. A hung request just delays its caller, and when a caller
/// re-issues a compare the response that arrives last wins.
pub struct DashboardProvider {
    client: Client,
    base_url: String,
}

impl DashboardProvider {
    /// Creates a provider against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a provider from the `DASHBOARD_API_URL` environment variable.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| ProviderInitError::MissingEnvVar(BASE_URL_VAR.to_string()))?;
        Self::new(base_url)
    }

    /// Creates a provider from a parsed [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ProviderInitError> {
        Self::new(config.base_url.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SeriesProvider for DashboardProvider {
    async fn fetch_catalog(&self) -> Result<SymbolCatalog, ProviderError> {
        let response = self.client.get(self.endpoint("/api/symbols")).send().await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        let raw = response.json::<CatalogResponse>().await?;
        Ok(catalog_from_response(raw))
    }

    async fn fetch_series(
        &self,
        params: SeriesRequestParams,
    ) -> Result<SeriesResult, ProviderError> {
        validate_items(&params)?;

        let query_params = construct_params(&params);
        let response = self
            .client
            .get(self.endpoint("/api/series"))
            .query(&query_params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        let raw = response.json::<SeriesResponse>().await?;
        Ok(series_from_response(raw))
    }
}

/// Converts the raw catalog payload into the typed catalog.
///
/// Category keys the client does not know are dropped, not errored: the
/// rest of the catalog is still useful and the selection flow can only
/// ever ask for known categories anyway.
pub fn catalog_from_response(raw: CatalogResponse) -> SymbolCatalog {
    let mut groups: IndexMap<Category, Vec<String>> = IndexMap::new();
    for (key, symbols) in raw.0 {
        match Category::from_dbkey(&key) {
            Some(category) => {
                groups.entry(category).or_default().extend(symbols);
            }
            None => warn!(dbkey = %key, "dropping unknown catalog category"),
        }
    }
    SymbolCatalog::new(groups)
}

/// Zips each symbol's `dates`/`close` arrays into canonical points.
///
/// A symbol whose arrays disagree in length is skipped with a warning;
/// partial results are acceptable and the remaining symbols still chart.
pub fn series_from_response(raw: SeriesResponse) -> SeriesResult {
    let mut result = SeriesResult::new();
    for (symbol, series) in raw.0 {
        if series.dates.len() != series.close.len() {
            warn!(
                %symbol,
                dates = series.dates.len(),
                closes = series.close.len(),
                "skipping series with misaligned arrays"
            );
            continue;
        }
        let points = series
            .dates
            .into_iter()
            .zip(series.close)
            .map(|(date, close)| SeriesPoint { date, close })
            .collect();
        result.insert(symbol, points);
    }
    result
}
