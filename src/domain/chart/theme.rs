//! Colors, fonts and spacing for the comparison chart.

use serde::{Deserialize, Serialize};

pub const FONT_FAMILY: &str = "Roboto, sans-serif";

/// A font size + family pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: u32,
    pub family: String,
}

impl FontSpec {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            family: FONT_FAMILY.to_string(),
        }
    }
}

/// Stroke and fill of one plotted series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub point_radius: u32,
}

/// Inner spacing around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: SeriesStyle,
    pub secondary: SeriesStyle,
    pub axis_title_font: FontSpec,
    pub tick_font: FontSpec,
    pub tooltip_title_font: FontSpec,
    pub tooltip_body_font: FontSpec,
    pub padding: Padding,
}

impl Theme {
    /// Purple primary, teal secondary.
    pub fn growth_index() -> Self {
        Self {
            name: "growth-index",
            primary: SeriesStyle {
                border_color: "#6f42c1".to_string(),
                background_color: "rgba(111, 66, 193, 0.1)".to_string(),
                border_width: 2,
                point_radius: 3,
            },
            secondary: SeriesStyle {
                border_color: "#17a2b8".to_string(),
                background_color: "rgba(23, 162, 184, 0.1)".to_string(),
                border_width: 2,
                point_radius: 3,
            },
            axis_title_font: FontSpec::new(14),
            tick_font: FontSpec::new(12),
            tooltip_title_font: FontSpec::new(14),
            tooltip_body_font: FontSpec::new(12),
            padding: Padding::uniform(20),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::growth_index()
    }
}
