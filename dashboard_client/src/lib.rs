//! Client for the finance comparison dashboard backend.
//!
//! The backend serves a grouped symbol catalog (`/api/symbols`) and daily
//! close series for a set of symbols over a date range (`/api/series`).
//! This crate holds the canonical data models, the REST provider behind
//! the [`providers::SeriesProvider`] trait, and the chart-surface sinks
//! that receive the finished Plotly-compatible payloads.

pub mod config;
pub mod io;
pub mod models;
pub mod providers;
