//! Chart-ready trace and layout descriptors.
//!
//! These serialize to the shape the Plotly-style rendering collaborator
//! expects: traces as `{x, y, name, mode, yaxis}` and a layout with two
//! overlaid vertical axes. Both are rebuilt from scratch on every compare
//! and never persisted.

use chrono::NaiveDate;
use serde::Serialize;

/// Which vertical scale a trace is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    /// Left axis: KRW and unit-less values, rendered together without
    /// conversion.
    #[serde(rename = "y")]
    Primary,
    /// Right axis: USD values.
    #[serde(rename = "y2")]
    Secondary,
}

/// One plotted line on the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTrace {
    /// Observation dates, ascending.
    pub x: Vec<NaiveDate>,
    /// Closing values, positionally aligned with `x`.
    pub y: Vec<f64>,
    /// Legend label: the symbol plus its unit annotation.
    pub name: String,
    /// Plotly drawing mode; always a line series here.
    pub mode: &'static str,
    /// Axis assignment, serialized as `"y"` or `"y2"`.
    pub yaxis: Axis,
}

impl ChartTrace {
    pub fn lines(name: String, x: Vec<NaiveDate>, y: Vec<f64>, yaxis: Axis) -> Self {
        Self {
            x,
            y,
            name,
            mode: "lines",
            yaxis,
        }
    }
}

/// Title + side of one vertical scale.
#[derive(Debug, Clone, Serialize)]
pub struct AxisLayout {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    pub side: &'static str,
    pub showgrid: bool,
    pub zeroline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendLayout {
    pub x: f64,
    pub y: f64,
    pub orientation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarginLayout {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct XAxisLayout {
    pub title: &'static str,
}

/// The fixed layout of the dual-axis comparison chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    pub title: &'static str,
    pub xaxis: XAxisLayout,
    pub yaxis: AxisLayout,
    pub yaxis2: AxisLayout,
    pub legend: LegendLayout,
    pub hovermode: &'static str,
    pub margin: MarginLayout,
}

impl ChartLayout {
    /// The comparison layout used by the original dashboard: left axis for
    /// KRW/unit-less series, right axis overlaid for USD series, unified
    /// hover and a horizontal legend above the plot.
    pub fn comparison() -> Self {
        Self {
            title: "시계열 비교 (원화/단위 없음 vs 달러)",
            xaxis: XAxisLayout { title: "날짜" },
            yaxis: AxisLayout {
                title: "원화 (₩) / 단위 없음",
                overlaying: None,
                side: "left",
                showgrid: true,
                zeroline: true,
            },
            yaxis2: AxisLayout {
                title: "달러 ($)",
                overlaying: Some("y"),
                side: "right",
                showgrid: false,
                zeroline: false,
            },
            legend: LegendLayout {
                x: 0.0,
                y: 1.1,
                orientation: "h",
            },
            hovermode: "x unified",
            // extra right margin keeps the secondary axis labels visible
            margin: MarginLayout {
                t: 50,
                b: 50,
                l: 60,
                r: 60,
            },
        }
    }
}
