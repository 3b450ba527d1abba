//! Parameters for requesting close series from the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// One selected comparison item: a symbol and the category it was picked
/// from.
///
/// The backend wire format carries symbols and dbkeys as two positionally
/// aligned comma lists; keeping them as a single sequence of pairs here
/// makes that alignment structural instead of a convention to uphold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    /// Symbol identifier, e.g. "USD/KRW" or "AAPL".
    pub symbol: String,
    /// The data source the symbol belongs to.
    pub category: Category,
}

impl SelectionItem {
    pub fn new(symbol: impl Into<String>, category: Category) -> Self {
        Self {
            symbol: symbol.into(),
            category,
        }
    }
}

/// Universal parameters for one `/api/series` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRequestParams {
    /// The comparison items, in selection (display) order.
    pub items: Vec<SelectionItem>,

    /// Start of the requested range (inclusive, calendar day).
    pub start: NaiveDate,

    /// End of the requested range (inclusive, calendar day).
    ///
    /// Whether `start <= end` holds is left to the backend; the client
    /// forwards the range as-is.
    pub end: NaiveDate,
}
