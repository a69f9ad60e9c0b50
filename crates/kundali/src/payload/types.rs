//! Wire types for the chart and compatibility services.
//!
//! The services emit snake_case keys; camelCase aliases are accepted for
//! older clients that re-serialize responses.

use crate::ashtakoot::{DoshaDetail, KutaDetail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlanet {
    pub sign: String,
    pub degree: f64,
    pub house: i64,
    #[serde(default, alias = "isRetrograde")]
    pub is_retrograde: Option<bool>,
    #[serde(default, alias = "isCombust")]
    pub is_combust: Option<bool>,
    #[serde(default)]
    pub vargottama: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNakshatra {
    pub nakshatra: String,
    #[serde(default)]
    pub pada: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHouse {
    #[serde(alias = "signNum")]
    pub sign_num: i64,
}

/// Divisional (D9) placement. The service sends the house as a string and
/// may leave either field empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDivisional {
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBirthDetails {
    /// `yyyy-MM-dd`
    pub dob: String,
    /// `HH:mm`
    #[serde(default)]
    pub time: String,
}

/// Response of the full-chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullChartResponse {
    pub planets: HashMap<String, RawPlanet>,
    #[serde(default)]
    pub nakshatra: HashMap<String, RawNakshatra>,
    #[serde(default)]
    pub houses: HashMap<String, RawHouse>,
    #[serde(default, alias = "divisionalCharts")]
    pub divisional_charts: HashMap<String, RawDivisional>,
    #[serde(default, alias = "birthDetails")]
    pub birth_details: Option<RawBirthDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoshaSummary {
    #[serde(default)]
    pub details: HashMap<String, DoshaDetail>,
}

/// Response of the compatibility endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub kutas: Vec<KutaDetail>,
    #[serde(default, alias = "doshaSummary")]
    pub dosha_summary: Option<DoshaSummary>,
}
