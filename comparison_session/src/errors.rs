use thiserror::Error;

use dashboard_client::{io::surface::SurfaceError, providers::errors::ProviderError};

/// Errors surfaced to the user by the comparison session.
///
/// The first four map to the blocking alerts of the original dashboard;
/// they are all raised before any state mutation or network request.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `add` was called with a blank symbol.
    #[error("a symbol is required to add a comparison item")]
    EmptySymbol,

    /// `add` was called for a symbol already in the selection.
    ///
    /// Duplicate adds never overwrite the existing category.
    #[error("'{symbol}' is already in the comparison list")]
    DuplicateSelection { symbol: String },

    /// `compare` was called with nothing selected; no request was issued.
    #[error("add at least one item to compare")]
    EmptySelection,

    /// Every requested symbol came back without data; the chart was
    /// cleared instead of rendering empty.
    #[error("no data for the selected period")]
    NoData,

    /// The backend call failed; catalog and chart are unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The chart surface failed to render or clear.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
