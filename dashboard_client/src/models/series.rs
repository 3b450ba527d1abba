//! Canonical in-memory representation of a daily close series.
//!
//! The backend only serves closing values, one per calendar day, so this is
//! deliberately thinner than a full OHLCV bar.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One observation: a calendar day and its closing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// The calendar day this close belongs to.
    pub date: NaiveDate,
    /// Closing value for that day.
    pub close: f64,
}

/// The result of one series query: symbol -> points, ascending by date.
///
/// Iteration order follows the backend response; a symbol that was
/// requested but yielded no data is simply absent or maps to an empty
/// vector — partial results are valid.
pub type SeriesResult = IndexMap<String, Vec<SeriesPoint>>;
