#![allow(dead_code)]

//! Hand-rolled provider and surface doubles for session tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use comparison_session::ComparisonSession;
use dashboard_client::{
    io::surface::{ChartSurface, SurfaceError},
    models::{
        catalog::SymbolCatalog,
        request_params::SeriesRequestParams,
        series::SeriesResult,
        trace::{ChartLayout, ChartTrace},
    },
    providers::{SeriesProvider, errors::ProviderError},
};

/// Serves a fixed catalog and series response, counting every call.
pub struct StaticProvider {
    pub catalog: SymbolCatalog,
    pub series: SeriesResult,
    pub series_calls: Arc<AtomicUsize>,
}

impl StaticProvider {
    pub fn with_series(series: SeriesResult) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Self {
            catalog: SymbolCatalog::default(),
            series,
            series_calls: Arc::clone(&calls),
        };
        (provider, calls)
    }
}

#[async_trait]
impl SeriesProvider for StaticProvider {
    async fn fetch_catalog(&self) -> Result<SymbolCatalog, ProviderError> {
        Ok(self.catalog.clone())
    }

    async fn fetch_series(
        &self,
        _params: SeriesRequestParams,
    ) -> Result<SeriesResult, ProviderError> {
        self.series_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.series.clone())
    }
}

/// What a surface was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Rendered {
        target: String,
        traces: Vec<ChartTrace>,
    },
    Cleared {
        target: String,
    },
}

/// Records render/clear calls for later assertions.
#[derive(Default)]
pub struct RecordingSurface {
    pub events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, Arc<Mutex<Vec<SurfaceEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let surface = Self {
            events: Arc::clone(&events),
        };
        (surface, events)
    }
}

impl ChartSurface for RecordingSurface {
    fn render(
        &self,
        target: &str,
        traces: &[ChartTrace],
        _layout: &ChartLayout,
    ) -> Result<(), SurfaceError> {
        self.events.lock().unwrap().push(SurfaceEvent::Rendered {
            target: target.to_string(),
            traces: traces.to_vec(),
        });
        Ok(())
    }

    fn clear(&self, target: &str) -> Result<(), SurfaceError> {
        self.events.lock().unwrap().push(SurfaceEvent::Cleared {
            target: target.to_string(),
        });
        Ok(())
    }
}

/// A session over empty doubles, for pure selection tests.
pub fn empty_session() -> ComparisonSession {
    let (provider, _) = StaticProvider::with_series(SeriesResult::default());
    let (surface, _) = RecordingSurface::new();
    ComparisonSession::new(Box::new(provider), Box::new(surface))
}

/// A session whose provider serves `series`, for selection-only tests that
/// don't inspect the surface.
pub fn session_with_series(series: SeriesResult) -> ComparisonSession {
    let (provider, _) = StaticProvider::with_series(series);
    let (surface, _) = RecordingSurface::new();
    ComparisonSession::new(Box::new(provider), Box::new(surface))
}
