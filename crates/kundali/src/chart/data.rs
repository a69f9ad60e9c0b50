use crate::zodiac::{Planet, Sign};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One planet in the birth chart (D1) as reported by the ephemeris service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub house: Option<u8>,
    pub sign: Option<Sign>,
    /// Ecliptic longitude, 0..360.
    pub degree: Option<f64>,
    #[serde(default)]
    pub retrograde: bool,
    #[serde(default)]
    pub vargottama: bool,
    #[serde(default)]
    pub combust: bool,
    pub nakshatra: Option<String>,
    pub pada: Option<u8>,
}

impl PlanetPosition {
    /// Degree within the sign, e.g. `"15°23'"`. Empty when no degree is known.
    pub fn formatted_degree(&self) -> String {
        match self.degree {
            Some(deg) if deg.is_finite() => {
                let deg = deg.rem_euclid(360.0);
                let whole = deg.trunc();
                let minutes = ((deg - whole) * 60.0).trunc() as i64;
                format!("{}°{}'", (whole as i64).rem_euclid(30), minutes)
            }
            _ => String::new(),
        }
    }
}

/// Divisional chart placement: house and sign only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignOnlyPosition {
    pub house: Option<u8>,
    pub sign: Option<Sign>,
}

/// Planet placements for one native. Keyed by [`Planet`] so every
/// iteration runs in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub d1: BTreeMap<Planet, PlanetPosition>,
    #[serde(default)]
    pub d9: BTreeMap<Planet, SignOnlyPosition>,
}

impl ChartData {
    /// House/sign pairs for the requested division.
    pub fn placements(
        &self,
        division: crate::settings::ChartDivision,
    ) -> Vec<(Planet, SignOnlyPosition)> {
        use crate::settings::ChartDivision;
        match division {
            ChartDivision::D1 => self
                .d1
                .iter()
                .map(|(planet, pos)| {
                    (
                        *planet,
                        SignOnlyPosition {
                            house: pos.house,
                            sign: pos.sign,
                        },
                    )
                })
                .collect(),
            ChartDivision::D9 => self.d9.iter().map(|(p, pos)| (*p, *pos)).collect(),
        }
    }
}
