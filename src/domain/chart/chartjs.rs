//! Chart.js configuration objects.
//!
//! Mirrors the JSON Chart.js expects for `new Chart(ctx, config)`: camelCase
//! keys, `{x, y}` data points, a `time` x-scale and one linear scale per value
//! axis keyed by axis id.

use super::{AxisPosition, ChartDescription, FontSpec, Padding, SeriesKind, ValueAxis};
use crate::error::SdkError;
use crate::shared::serde_util::calendar_date;
use serde::Serialize;
use std::collections::BTreeMap;

/// Top-level Chart.js config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJsConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartJsData,
    pub options: ChartJsOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJsData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartJsDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    pub label: String,
    pub data: Vec<ChartJsPoint>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub point_radius: u32,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJsPoint {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsOptions {
    pub maintain_aspect_ratio: bool,
    pub scales: ChartJsScales,
    pub plugins: ChartJsPlugins,
    pub layout: ChartJsLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJsScales {
    pub x: TimeScale,
    /// `y`, plus `y2` in dual-axis mode.
    #[serde(flatten)]
    pub value_scales: BTreeMap<&'static str, LinearScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeScale {
    #[serde(rename = "type")]
    pub scale_type: &'static str,
    pub time: TimeOptions,
    pub ticks: TimeTicks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOptions {
    pub unit: String,
    pub tooltip_format: String,
    pub display_formats: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTicks {
    pub font: FontSpec,
    pub max_rotation: u32,
    pub auto_skip: bool,
    pub max_ticks_limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearScale {
    pub title: ScaleTitle,
    pub ticks: FontTicks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTitle {
    pub display: bool,
    pub text: String,
    pub font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontTicks {
    pub font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJsPlugins {
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub title_font: FontSpec,
    pub body_font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartJsLayout {
    pub padding: Padding,
}

impl ChartJsConfig {
    pub fn to_json(&self) -> Result<serde_json::Value, SdkError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SdkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ChartDescription {
    pub fn to_chartjs(&self) -> ChartJsConfig {
        ChartJsConfig::from(self)
    }
}

impl From<&ChartDescription> for ChartJsConfig {
    fn from(desc: &ChartDescription) -> Self {
        let is_bar = desc.series.iter().any(|s| s.kind == SeriesKind::Bar);

        let datasets = desc
            .series
            .iter()
            .map(|s| ChartJsDataset {
                label: s.label.clone(),
                data: s
                    .points
                    .iter()
                    .map(|p| ChartJsPoint {
                        x: p.date.format(calendar_date::FORMAT).to_string(),
                        y: p.value,
                    })
                    .collect(),
                border_color: s.style.border_color.clone(),
                background_color: s.style.background_color.clone(),
                border_width: s.style.border_width,
                point_radius: s.style.point_radius,
                y_axis_id: s.axis.as_str(),
            })
            .collect();

        let x = TimeScale {
            scale_type: "time",
            time: TimeOptions {
                unit: desc.x_axis.unit.clone(),
                tooltip_format: desc.x_axis.tooltip_format.clone(),
                display_formats: BTreeMap::from([(
                    desc.x_axis.unit.clone(),
                    desc.x_axis.display_format.clone(),
                )]),
            },
            ticks: TimeTicks {
                font: desc.x_axis.tick_font.clone(),
                max_rotation: desc.x_axis.max_rotation,
                auto_skip: desc.x_axis.auto_skip,
                max_ticks_limit: desc.x_axis.max_ticks_limit,
            },
        };

        let value_scales = desc
            .y_axes
            .iter()
            .map(|axis| (axis.id.as_str(), linear_scale(axis)))
            .collect();

        ChartJsConfig {
            chart_type: if is_bar { "bar" } else { "line" },
            data: ChartJsData {
                labels: desc.label_strings(),
                datasets,
            },
            options: ChartJsOptions {
                maintain_aspect_ratio: desc.maintain_aspect_ratio,
                scales: ChartJsScales { x, value_scales },
                plugins: ChartJsPlugins {
                    tooltip: TooltipOptions {
                        title_font: desc.tooltip.title_font.clone(),
                        body_font: desc.tooltip.body_font.clone(),
                    },
                },
                layout: ChartJsLayout {
                    padding: desc.padding,
                },
                index_axis: desc.bar_layout.map(|_| "x"),
                bar_percentage: desc.bar_layout.map(|b| b.bar_percentage),
                category_percentage: desc.bar_layout.map(|b| b.category_percentage),
            },
        }
    }
}

fn linear_scale(axis: &ValueAxis) -> LinearScale {
    LinearScale {
        title: ScaleTitle {
            display: true,
            text: axis.title.clone(),
            font: axis.title_font.clone(),
        },
        ticks: FontTicks {
            font: axis.tick_font.clone(),
        },
        position: (axis.position == AxisPosition::Right).then_some(AxisPosition::Right),
        grid: (!axis.grid_on_chart_area).then_some(GridOptions {
            draw_on_chart_area: false,
        }),
    }
}
