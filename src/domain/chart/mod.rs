//! Chart domain — renderer-agnostic description of the comparison chart.
//!
//! [`describe`] turns a dataset pair, a [`Granularity`] and a [`ChartMode`]
//! into a [`ChartDescription`]; [`ChartState`] owns those inputs for a hosting
//! view and recomputes on every change; [`chartjs`] maps a description onto a
//! Chart.js configuration object.
//!
//! [`Granularity`]: crate::shared::Granularity
//! [`ChartMode`]: crate::shared::ChartMode

pub mod chartjs;
pub mod downsample;
mod presenter;
pub mod state;
pub mod theme;

use crate::domain::growth_index::GrowthPoint;
use crate::shared::{ChartMode, Granularity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use downsample::downsample;
pub use presenter::{describe, describe_with_theme};
pub use state::ChartState;
pub use theme::{FontSpec, Padding, SeriesStyle, Theme};

/// Heading shown above the chart.
pub const CHART_TITLE: &str = "Growth Index Comparison";

// ─── Axes ────────────────────────────────────────────────────────────────────

/// Identifier a series uses to bind to a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    /// Left-hand axis, always present.
    Y,
    /// Right-hand axis, only in dual-axis mode.
    Y2,
}

impl AxisId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Y => "y",
            Self::Y2 => "y2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

/// A vertical value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub id: AxisId,
    pub title: String,
    pub position: AxisPosition,
    /// `false` keeps this axis' gridlines off the plot area so they don't
    /// clash with the left axis grid.
    pub grid_on_chart_area: bool,
    pub title_font: FontSpec,
    pub tick_font: FontSpec,
}

/// The horizontal time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    pub unit: String,
    pub tooltip_format: String,
    pub display_format: String,
    pub tick_font: FontSpec,
    pub max_rotation: u32,
    pub auto_skip: bool,
    pub max_ticks_limit: u32,
}

// ─── Series ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
}

/// One plotted series: its (downsampled) points, how to draw it and which
/// axis it binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub label: String,
    pub kind: SeriesKind,
    pub axis: AxisId,
    pub style: SeriesStyle,
    pub points: Vec<GrowthPoint>,
}

/// Width fractions of overlaid bars within their category slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub bar_percentage: f64,
    pub category_percentage: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            bar_percentage: 0.6,
            category_percentage: 0.8,
        }
    }
}

/// Tooltip fonts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub title_font: FontSpec,
    pub body_font: FontSpec,
}

// ─── ChartDescription ────────────────────────────────────────────────────────

/// Everything a renderer needs to draw the comparison chart.
///
/// Derived and ephemeral: recompute it whenever the data, granularity or mode
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub mode: ChartMode,
    pub granularity: Granularity,
    pub title: String,
    /// Dates of the downsampled primary series.
    pub labels: Vec<NaiveDate>,
    pub series: Vec<SeriesDescriptor>,
    pub x_axis: TimeAxis,
    /// One axis in line/bar mode, two in dual-axis mode.
    pub y_axes: Vec<ValueAxis>,
    /// Only set in bar mode.
    pub bar_layout: Option<BarLayout>,
    pub tooltip: TooltipStyle,
    pub padding: Padding,
    pub maintain_aspect_ratio: bool,
}

impl ChartDescription {
    pub fn y_axis(&self, id: AxisId) -> Option<&ValueAxis> {
        self.y_axes.iter().find(|a| a.id == id)
    }

    /// Labels as `YYYY-MM-DD` strings.
    pub fn label_strings(&self) -> Vec<String> {
        self.labels
            .iter()
            .map(|d| d.format(crate::shared::serde_util::calendar_date::FORMAT).to_string())
            .collect()
    }
}
