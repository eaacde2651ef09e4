//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend (or the chart frontend) uses, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::num::NonZeroUsize;
use std::str::FromStr;

// ─── ChainName ───────────────────────────────────────────────────────────────

/// Newtype for blockchain identifiers as the API expects them (e.g. `"ethereum"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainName(String);

impl ChainName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name: first letter of each word upper-cased.
    ///
    /// `"ethereum"` → `"Ethereum"`, `"bnb chain"` → `"Bnb Chain"`.
    pub fn display_name(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for ChainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChainName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ChainName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for ChainName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChainName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ChainName(s))
    }
}

// ─── Granularity ─────────────────────────────────────────────────────────────

/// Sampling stride: keep every Nth point, starting at index 0.
///
/// This is an index stride, not a time duration. With weekly source data a
/// stride of 2 reads as "2 Weeks" in the selector, but gaps in the source are
/// not compensated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Granularity(NonZeroUsize);

impl Granularity {
    pub const ONE: Granularity = Granularity(NonZeroUsize::MIN);
    pub const TWO: Granularity = match NonZeroUsize::new(2) {
        Some(n) => Granularity(n),
        None => Granularity::ONE,
    };
    pub const FOUR: Granularity = match NonZeroUsize::new(4) {
        Some(n) => Granularity(n),
        None => Granularity::ONE,
    };

    /// Strict constructor: a stride of zero is rejected.
    pub fn new(stride: usize) -> Result<Self, SdkError> {
        NonZeroUsize::new(stride)
            .map(Granularity)
            .ok_or_else(|| SdkError::Validation("granularity must be at least 1".to_string()))
    }

    /// Lenient constructor: a stride of zero becomes 1.
    pub fn clamped(stride: usize) -> Self {
        NonZeroUsize::new(stride).map(Granularity).unwrap_or(Self::ONE)
    }

    /// The presets offered by the granularity selector.
    pub fn options() -> [Granularity; 3] {
        [Self::ONE, Self::TWO, Self::FOUR]
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Selector label, e.g. `"1 Week"`, `"4 Weeks"`.
    pub fn label(&self) -> String {
        match self.get() {
            1 => "1 Week".to_string(),
            n => format!("{} Weeks", n),
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Granularity {
    type Error = SdkError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Granularity {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stride = s
            .trim()
            .parse::<usize>()
            .map_err(|e| SdkError::Validation(format!("invalid granularity '{}': {}", s, e)))?;
        Self::new(stride)
    }
}

impl Serialize for Granularity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for Granularity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = usize::deserialize(deserializer)?;
        Granularity::new(n).map_err(serde::de::Error::custom)
    }
}

// ─── ChartMode ───────────────────────────────────────────────────────────────

/// Chart rendering mode selected by the three-way toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartMode {
    /// One shared axis, two overlaid line series.
    #[default]
    #[serde(rename = "line")]
    Line,
    /// One shared axis, two overlaid bar series.
    #[serde(rename = "bar")]
    Bar,
    /// Two independent Y-axes, one line series per axis.
    #[serde(rename = "dual-axis")]
    DualAxisLine,
}

impl ChartMode {
    /// Toggle order.
    pub const ALL: [ChartMode; 3] = [ChartMode::Line, ChartMode::Bar, ChartMode::DualAxisLine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::DualAxisLine => "dual-axis",
        }
    }

    /// Toggle button title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Bar => "Bar Chart",
            Self::DualAxisLine => "Dual Axis Line Chart",
        }
    }

    /// Number of independent Y-axes the mode lays out.
    pub fn y_axis_count(&self) -> usize {
        match self {
            Self::Line | Self::Bar => 1,
            Self::DualAxisLine => 2,
        }
    }
}

impl std::fmt::Display for ChartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartMode {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "dual-axis" => Ok(Self::DualAxisLine),
            other => Err(SdkError::Validation(format!("unknown chart mode '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_name_display_name() {
        assert_eq!(ChainName::from("ethereum").display_name(), "Ethereum");
        assert_eq!(ChainName::from("bnb chain").display_name(), "Bnb Chain");
        assert_eq!(ChainName::from("").display_name(), "");
    }

    #[test]
    fn test_chain_name_serde() {
        let name = ChainName::from("solana");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"solana\"");
        let back: ChainName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }

    #[test]
    fn test_granularity_rejects_zero() {
        assert!(matches!(Granularity::new(0), Err(SdkError::Validation(_))));
        assert_eq!(Granularity::new(3).unwrap().get(), 3);
    }

    #[test]
    fn test_granularity_clamps_zero_to_one() {
        assert_eq!(Granularity::clamped(0), Granularity::ONE);
        assert_eq!(Granularity::clamped(4), Granularity::FOUR);
    }

    #[test]
    fn test_granularity_presets_and_labels() {
        let labels: Vec<_> = Granularity::options().iter().map(|g| g.label()).collect();
        assert_eq!(labels, ["1 Week", "2 Weeks", "4 Weeks"]);
        assert_eq!(Granularity::default(), Granularity::ONE);
    }

    #[test]
    fn test_granularity_parse_and_serde() {
        let g: Granularity = "2".parse().unwrap();
        assert_eq!(g, Granularity::TWO);
        assert!("0".parse::<Granularity>().is_err());
        assert!("two".parse::<Granularity>().is_err());

        let json = serde_json::to_string(&Granularity::FOUR).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<Granularity>("0").is_err());
    }

    #[test]
    fn test_chart_mode_serde() {
        let m: ChartMode = serde_json::from_str("\"dual-axis\"").unwrap();
        assert_eq!(m, ChartMode::DualAxisLine);
        assert_eq!(serde_json::to_string(&ChartMode::Bar).unwrap(), "\"bar\"");
        assert_eq!(ChartMode::default(), ChartMode::Line);
    }

    #[test]
    fn test_chart_mode_from_str_and_titles() {
        for mode in ChartMode::ALL {
            assert_eq!(mode.as_str().parse::<ChartMode>().unwrap(), mode);
        }
        assert!("pie".parse::<ChartMode>().is_err());
        assert_eq!(ChartMode::DualAxisLine.title(), "Dual Axis Line Chart");
    }
}
