//! File-backed chart surface emitting Plotly-compatible JSON documents.

use std::{fs, path::PathBuf};

use serde::Serialize;
use snafu::ResultExt;

use crate::{
    io::surface::{ChartSurface, ConversionSnafu, IoSnafu, SurfaceError},
    models::trace::{ChartLayout, ChartTrace},
};

/// The document written per target: everything a Plotly `newPlot` call needs.
#[derive(Serialize)]
struct ChartDocument<'a> {
    target: &'a str,
    data: &'a [ChartTrace],
    layout: &'a ChartLayout,
}

/// Writes one `<target>.json` chart document per render under a base
/// directory; `clear` unlinks it. Re-rendering overwrites in place, which
/// matches the rebuild-from-scratch policy of the comparison flow.
pub struct JsonFileSurface {
    base_dir: PathBuf,
}

impl JsonFileSurface {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The file a given target renders into.
    pub fn path_for(&self, target: &str) -> PathBuf {
        self.base_dir.join(format!("{target}.json"))
    }
}

impl ChartSurface for JsonFileSurface {
    fn render(
        &self,
        target: &str,
        traces: &[ChartTrace],
        layout: &ChartLayout,
    ) -> Result<(), SurfaceError> {
        fs::create_dir_all(&self.base_dir).context(IoSnafu)?;

        let doc = ChartDocument {
            target,
            data: traces,
            layout,
        };
        let body = serde_json::to_vec_pretty(&doc).context(ConversionSnafu)?;

        fs::write(self.path_for(target), body).context(IoSnafu)?;
        Ok(())
    }

    fn clear(&self, target: &str) -> Result<(), SurfaceError> {
        match fs::remove_file(self.path_for(target)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(IoSnafu),
        }
    }
}
