//! Builds chart traces from a series response and the current selection.

use dashboard_client::models::{
    category::Category,
    series::SeriesResult,
    trace::{ChartTrace, ChartLayout},
};
use tracing::warn;

/// Re-export of the fixed dual-axis layout; the session hands this to the
/// surface together with the traces.
pub fn comparison_layout() -> ChartLayout {
    ChartLayout::comparison()
}

/// Constructs one trace per selected symbol that actually has data.
///
/// Symbols absent from the response, or present with an empty series, are
/// skipped with a warning — partial results are fine and never fail the
/// whole comparison. Iteration order (and therefore legend order) follows
/// the selection's insertion order.
pub fn build_traces<'a, I>(selection: I, result: &SeriesResult) -> Vec<ChartTrace>
where
    I: IntoIterator<Item = (&'a str, Category)>,
{
    let mut traces = Vec::new();

    for (symbol, category) in selection {
        let Some(points) = result.get(symbol).filter(|p| !p.is_empty()) else {
            warn!(%symbol, "no data found for symbol");
            continue;
        };

        let name = format!("{symbol} {}", category.unit_annotation());
        let x = points.iter().map(|p| p.date).collect();
        let y = points.iter().map(|p| p.close).collect();

        traces.push(ChartTrace::lines(name, x, y, category.axis()));
    }

    traces
}
