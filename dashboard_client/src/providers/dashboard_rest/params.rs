use crate::{
    models::request_params::SeriesRequestParams, providers::errors::ProviderError,
};

/// Date format the backend expects in `start_date` / `end_date`.
const DATE_FMT: &str = "%Y-%m-%d";

/// Rejects parameter sets the backend cannot serve meaningfully.
///
/// The date range itself is not validated (`start <= end` is the backend's
/// concern), but an empty item list or a blank symbol would only produce a
/// confusing empty query string, so both fail fast here.
pub fn validate_items(params: &SeriesRequestParams) -> Result<(), ProviderError> {
    if params.items.is_empty() {
        return Err(ProviderError::Validation(
            "at least one selection item is required".to_string(),
        ));
    }
    if let Some(item) = params.items.iter().find(|i| i.symbol.trim().is_empty()) {
        return Err(ProviderError::Validation(format!(
            "blank symbol in selection (category {})",
            item.category
        )));
    }
    Ok(())
}

/// Builds the `/api/series` query pairs.
///
/// The backend zips `symbols` and `dbkeys` positionally; both comma lists
/// are derived from the same pass over `params.items`, so the alignment
/// cannot drift.
pub fn construct_params(params: &SeriesRequestParams) -> Vec<(String, String)> {
    let symbols = params
        .items
        .iter()
        .map(|i| i.symbol.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let dbkeys = params
        .items
        .iter()
        .map(|i| i.category.dbkey())
        .collect::<Vec<_>>()
        .join(",");

    vec![
        (
            "start_date".to_string(),
            params.start.format(DATE_FMT).to_string(),
        ),
        (
            "end_date".to_string(),
            params.end.format(DATE_FMT).to_string(),
        ),
        ("symbols".to_string(), symbols),
        ("dbkeys".to_string(), dbkeys),
    ]
}
