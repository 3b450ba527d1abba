//! REST adapter for the dashboard backend's `/api/symbols` and
//! `/api/series` endpoints.

pub mod params;
pub mod provider;
pub mod response;

pub use provider::DashboardProvider;
