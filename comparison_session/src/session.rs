//! The session object owning catalog, selection, and collaborators.

use chrono::NaiveDate;
use indexmap::IndexMap;

use dashboard_client::{
    io::surface::ChartSurface,
    models::{
        catalog::SymbolCatalog,
        category::Category,
        request_params::{SelectionItem, SeriesRequestParams},
    },
    providers::SeriesProvider,
};

use crate::{errors::SessionError, trace};

/// Inclusive date range of one comparison request.
///
/// Both endpoints are required by construction; whether `start <= end`
/// holds is deliberately left to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// One user's comparison session: the loaded catalog, the curated
/// selection, and the provider/surface collaborators.
///
/// All state lives here as explicit fields; mutations happen only through
/// the command handlers below, each driven by one discrete user action.
pub struct ComparisonSession {
    provider: Box<dyn SeriesProvider>,
    surface: Box<dyn ChartSurface>,
    catalog: SymbolCatalog,
    selection: IndexMap<String, Category>,
    target: String,
}

impl ComparisonSession {
    /// Default surface target identifier, matching the original dashboard's
    /// chart element id.
    pub const DEFAULT_TARGET: &'static str = "chart";

    /// Creates a session with an empty catalog and selection.
    pub fn new(provider: Box<dyn SeriesProvider>, surface: Box<dyn ChartSurface>) -> Self {
        Self {
            provider,
            surface,
            catalog: SymbolCatalog::default(),
            selection: IndexMap::new(),
            target: Self::DEFAULT_TARGET.to_string(),
        }
    }

    /// Overrides the surface target the chart renders into.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Loads the symbol catalog once, at session start.
    ///
    /// On failure the catalog stays empty and dependent pickers stay
    /// disabled; the caller surfaces the error and may simply retry the
    /// whole action. There is no automatic retry.
    pub async fn load_catalog(&mut self) -> Result<(), SessionError> {
        let catalog = self.provider.fetch_catalog().await?;
        self.catalog = catalog;
        Ok(())
    }

    /// The loaded catalog; empty until [`load_catalog`](Self::load_catalog)
    /// succeeds.
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Symbols available under a category, or `None` while the catalog is
    /// unloaded or the category missing.
    pub fn symbols_for(&self, category: Category) -> Option<&[String]> {
        self.catalog.symbols(category)
    }

    /// Adds a symbol to the comparison selection.
    ///
    /// Fails on a blank symbol or a duplicate; either way the selection is
    /// untouched. Whether the symbol actually exists in the catalog is not
    /// enforced (best effort, as in the original).
    pub fn add(&mut self, symbol: &str, category: Category) -> Result<(), SessionError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(SessionError::EmptySymbol);
        }
        if self.selection.contains_key(symbol) {
            return Err(SessionError::DuplicateSelection {
                symbol: symbol.to_string(),
            });
        }
        self.selection.insert(symbol.to_string(), category);
        Ok(())
    }

    /// Removes a symbol from the selection; removing an absent symbol is a
    /// silent no-op. Display order of the remaining items is preserved.
    pub fn remove(&mut self, symbol: &str) {
        self.selection.shift_remove(symbol);
    }

    /// The current selection in insertion (display) order.
    pub fn list(&self) -> impl Iterator<Item = (&str, Category)> {
        self.selection.iter().map(|(s, c)| (s.as_str(), *c))
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Display label for one selection entry, e.g. `USD/KRW [환율]`.
    pub fn display_label(symbol: &str, category: Category) -> String {
        format!("{symbol} {}", category.list_suffix())
    }

    /// Fetches series for the whole selection and renders the comparison
    /// chart. Returns the number of traces drawn.
    ///
    /// With an empty selection no request is issued. Partial data is fine;
    /// only when *no* symbol yields data is the existing chart cleared and
    /// [`SessionError::NoData`] returned. On provider failure the chart is
    /// left untouched.
    pub async fn compare(&self, range: DateRange) -> Result<usize, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let params = SeriesRequestParams {
            items: self
                .selection
                .iter()
                .map(|(symbol, category)| SelectionItem::new(symbol.clone(), *category))
                .collect(),
            start: range.start,
            end: range.end,
        };

        let result = self.provider.fetch_series(params).await?;

        let traces = trace::build_traces(self.list(), &result);
        if traces.is_empty() {
            self.surface.clear(&self.target)?;
            return Err(SessionError::NoData);
        }

        let layout = trace::comparison_layout();
        self.surface.render(&self.target, &traces, &layout)?;
        Ok(traces.len())
    }
}
