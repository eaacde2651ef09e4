//! Builds a [`ChartDescription`] from a dataset pair, a granularity and a mode.

use super::theme::Theme;
use super::{
    AxisId, AxisPosition, BarLayout, ChartDescription, SeriesDescriptor, SeriesKind, TimeAxis,
    TooltipStyle, ValueAxis, CHART_TITLE,
};
use crate::domain::growth_index::TimeSeries;
use crate::shared::{ChartMode, Granularity};

const SHARED_AXIS_TITLE: &str = "Growth Index";
const SECONDARY_AXIS_TITLE: &str = "Cumulative Growth Index";

/// Describe the comparison chart with the default theme.
pub fn describe(
    primary: &TimeSeries,
    secondary: &TimeSeries,
    granularity: Granularity,
    mode: ChartMode,
) -> ChartDescription {
    describe_with_theme(primary, secondary, granularity, mode, &Theme::default())
}

/// Describe the comparison chart.
///
/// Both series are downsampled independently with the same stride; labels come
/// from the downsampled primary only. The secondary series binds to the left
/// axis in line/bar mode and to its own right-hand axis in dual-axis mode.
pub fn describe_with_theme(
    primary: &TimeSeries,
    secondary: &TimeSeries,
    granularity: Granularity,
    mode: ChartMode,
    theme: &Theme,
) -> ChartDescription {
    let primary = primary.downsampled(granularity);
    let secondary = secondary.downsampled(granularity);
    let labels = primary.dates().collect();

    let kind = match mode {
        ChartMode::Bar => SeriesKind::Bar,
        ChartMode::Line | ChartMode::DualAxisLine => SeriesKind::Line,
    };
    let secondary_axis = match mode {
        ChartMode::DualAxisLine => AxisId::Y2,
        ChartMode::Line | ChartMode::Bar => AxisId::Y,
    };

    let y_axes = match mode {
        ChartMode::Line | ChartMode::Bar => {
            vec![value_axis(AxisId::Y, SHARED_AXIS_TITLE.to_string(), theme)]
        }
        ChartMode::DualAxisLine => vec![
            value_axis(
                AxisId::Y,
                format!("{} {}", primary.label, SHARED_AXIS_TITLE),
                theme,
            ),
            value_axis(AxisId::Y2, SECONDARY_AXIS_TITLE.to_string(), theme),
        ],
    };

    let series = vec![
        SeriesDescriptor {
            label: primary.label,
            kind,
            axis: AxisId::Y,
            style: theme.primary.clone(),
            points: primary.points,
        },
        SeriesDescriptor {
            label: secondary.label,
            kind,
            axis: secondary_axis,
            style: theme.secondary.clone(),
            points: secondary.points,
        },
    ];

    ChartDescription {
        mode,
        granularity,
        title: CHART_TITLE.to_string(),
        labels,
        series,
        x_axis: TimeAxis {
            unit: "week".to_string(),
            tooltip_format: "MMM d".to_string(),
            display_format: "MMM d".to_string(),
            tick_font: theme.tick_font.clone(),
            max_rotation: 0,
            auto_skip: true,
            max_ticks_limit: 10,
        },
        y_axes,
        bar_layout: (mode == ChartMode::Bar).then(BarLayout::default),
        tooltip: TooltipStyle {
            title_font: theme.tooltip_title_font.clone(),
            body_font: theme.tooltip_body_font.clone(),
        },
        padding: theme.padding,
        maintain_aspect_ratio: false,
    }
}

fn value_axis(id: AxisId, title: String, theme: &Theme) -> ValueAxis {
    let (position, grid_on_chart_area) = match id {
        AxisId::Y => (AxisPosition::Left, true),
        AxisId::Y2 => (AxisPosition::Right, false),
    };
    ValueAxis {
        id,
        title,
        position,
        grid_on_chart_area,
        title_font: theme.axis_title_font.clone(),
        tick_font: theme.tick_font.clone(),
    }
}
