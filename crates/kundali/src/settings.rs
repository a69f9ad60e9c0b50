use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which chart convention to project into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    #[default]
    NorthIndian,
    SouthIndian,
}

/// Divisional chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartDivision {
    #[default]
    D1,
    D9,
}

/// How kuta records from the service are matched against the eight factor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KutaMatching {
    /// Case-insensitive prefix of the record name ("Nadi Kuta" matches "nadi").
    #[default]
    Prefix,
    /// Case-insensitive equality with the factor key.
    Exact,
}

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("house_margin must be within (0, 0.1), got {0}")]
    MarginOutOfRange(f32),
}

/// Engine-wide options, passed explicitly to every projection and scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub chart_style: ChartStyle,
    pub division: ChartDivision,
    pub include_outer_planets: bool,
    pub kuta_matching: KutaMatching,
    pub house_margin: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            chart_style: ChartStyle::NorthIndian,
            division: ChartDivision::D1,
            include_outer_planets: false,
            kuta_matching: KutaMatching::Prefix,
            house_margin: crate::layout::HOUSE_MARGIN,
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        // Larger margins push corner-house centroids onto the diagonals.
        if !(self.house_margin > 0.0 && self.house_margin < 0.1) {
            return Err(SettingsError::MarginOutOfRange(self.house_margin));
        }
        Ok(())
    }
}
