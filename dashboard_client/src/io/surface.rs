use snafu::{Backtrace, Snafu};

use crate::models::trace::{ChartLayout, ChartTrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SurfaceError {
    /// An error occurred while trying to write the chart (e.g., file I/O error).
    #[snafu(display("Failed to write chart: {message}"))]
    WriteError {
        message: String,
        backtrace: Backtrace,
    },

    /// An error occurred while converting traces and layout into the
    /// surface's payload format.
    #[snafu(display("Chart conversion error: {source}"))]
    ConversionError {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// The external chart rendering collaborator.
///
/// Rendering is fire-and-forget: the caller hands over the full trace set
/// and layout in one call and consumes no result beyond error propagation.
pub trait ChartSurface: Send + Sync {
    /// Draws (or fully replaces) the chart on the named target surface.
    fn render(
        &self,
        target: &str,
        traces: &[ChartTrace],
        layout: &ChartLayout,
    ) -> Result<(), SurfaceError>;

    /// Removes any existing chart from the target surface.
    ///
    /// Clearing a surface that has no chart is a no-op.
    fn clear(&self, target: &str) -> Result<(), SurfaceError>;
}
