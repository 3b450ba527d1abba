//! The data-source category a symbol belongs to.
//!
//! The backend calls this the "dbkey": it routes each symbol to one of four
//! underlying databases. The category also decides how a symbol is labeled
//! in the comparison list and which chart axis its series lands on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::trace::Axis;

/// One of the four data sources served by the dashboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Currency pairs, e.g. "USD/KRW".
    Currency,
    /// Market indices, e.g. "KOSPI".
    Index,
    /// Korean equities, priced in KRW.
    StockKr,
    /// US equities, priced in USD.
    StockUs,
}

impl Category {
    /// All categories, in the order the original dashboard listed them.
    pub const ALL: [Category; 4] = [
        Category::Currency,
        Category::Index,
        Category::StockKr,
        Category::StockUs,
    ];

    /// The wire identifier used as a query parameter and catalog key.
    pub fn dbkey(self) -> &'static str {
        match self {
            Category::Currency => "currency",
            Category::Index => "index",
            Category::StockKr => "stock_kr",
            Category::StockUs => "stock_us",
        }
    }

    /// Parses a wire identifier. Unknown dbkeys are not representable and
    /// must be dropped (or rejected) by the caller.
    pub fn from_dbkey(s: &str) -> Option<Category> {
        match s {
            "currency" => Some(Category::Currency),
            "index" => Some(Category::Index),
            "stock_kr" => Some(Category::StockKr),
            "stock_us" => Some(Category::StockUs),
            _ => None,
        }
    }

    /// Suffix appended to a symbol in the comparison list, e.g.
    /// `USD/KRW [환율]`.
    pub fn list_suffix(self) -> &'static str {
        match self {
            Category::Currency => "[환율]",
            Category::Index => "[지수]",
            Category::StockKr => "[한국/₩]",
            Category::StockUs => "[미국/$]",
        }
    }

    /// Unit annotation appended to a trace name on the chart legend.
    ///
    /// Currencies and indices are charted without a unit; only the two
    /// equity sources carry one.
    pub fn unit_annotation(self) -> &'static str {
        match self {
            Category::Currency | Category::Index => "(단위 없음)",
            Category::StockKr => "(KRW)",
            Category::StockUs => "(USD)",
        }
    }

    /// Which vertical axis this category's series is plotted against.
    ///
    /// US equities get the secondary (USD) axis. Everything else shares the
    /// primary axis with no unit conversion; mixing KRW and unit-less
    /// values there is a deliberate simplification, not a bug.
    pub fn axis(self) -> Axis {
        match self {
            Category::StockUs => Axis::Secondary,
            _ => Axis::Primary,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dbkey())
    }
}
