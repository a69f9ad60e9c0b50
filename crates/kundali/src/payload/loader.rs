use crate::ashtakoot::{aggregate, AshtakootFactorView, CompatibilitySummary, KutaDetail};
use crate::chart::{ChartData, PlanetPosition, SignOnlyPosition};
use crate::payload::types::{CompatibilityResponse, FullChartResponse, RawBirthDetails};
use crate::settings::EngineSettings;
use crate::zodiac::{Planet, Sign};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing service payloads
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid field value: {0}")]
    InvalidField(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: NaiveDate,
    /// Absent when the birth time is unknown or malformed.
    pub time: Option<NaiveTime>,
}

/// Chart data extracted from a [`FullChartResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAdapterOutput {
    pub chart: ChartData,
    pub ascendant: Option<Sign>,
    pub birth: Option<BirthMoment>,
    /// Planet names the engine does not model, sorted.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub factors: Vec<AshtakootFactorView>,
    pub summary: CompatibilitySummary,
}

fn valid_house(house: i64) -> Option<u8> {
    u8::try_from(house).ok().filter(|h| (1..=12).contains(h))
}

fn valid_pada(planet: &str, pada: Option<u8>) -> Option<u8> {
    match pada {
        Some(p) if !(1..=4).contains(&p) => {
            log::warn!("{}: pada {} out of range", planet, p);
            None
        }
        other => other,
    }
}

fn parse_sign(planet: &str, code: &str) -> Option<Sign> {
    let sign = Sign::from_code(code);
    if sign.is_none() && !code.trim().is_empty() {
        log::warn!("{}: unknown sign code {:?}", planet, code);
    }
    sign
}

fn parse_birth(details: &RawBirthDetails) -> Option<BirthMoment> {
    let date = match NaiveDate::parse_from_str(details.dob.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            log::warn!("unparseable birth date {:?}: {}", details.dob, e);
            return None;
        }
    };
    let time = match NaiveTime::parse_from_str(details.time.trim(), "%H:%M") {
        Ok(time) => Some(time),
        Err(e) => {
            log::warn!("unparseable birth time {:?}: {}", details.time, e);
            None
        }
    };
    Some(BirthMoment { date, time })
}

impl FullChartResponse {
    pub fn to_chart_data(&self) -> ChartAdapterOutput {
        let mut chart = ChartData::default();
        let mut skipped: Vec<String> = Vec::new();

        for (name, raw) in &self.planets {
            let Some(planet) = Planet::from_name(name) else {
                log::warn!("skipping unknown planet {:?} in D1", name);
                skipped.push(name.clone());
                continue;
            };
            let nakshatra = self.nakshatra.get(name);
            let house = valid_house(raw.house);
            if house.is_none() {
                log::warn!("{}: house {} out of range", name, raw.house);
            }
            chart.d1.insert(
                planet,
                PlanetPosition {
                    house,
                    sign: parse_sign(name, &raw.sign),
                    degree: Some(raw.degree),
                    retrograde: raw.is_retrograde.unwrap_or(false),
                    vargottama: raw.vargottama.unwrap_or(false),
                    combust: raw.is_combust.unwrap_or(false),
                    nakshatra: nakshatra.map(|n| n.nakshatra.clone()),
                    pada: valid_pada(name, nakshatra.and_then(|n| n.pada)),
                },
            );
        }

        for (name, raw) in &self.divisional_charts {
            let Some(planet) = Planet::from_name(name) else {
                log::warn!("skipping unknown planet {:?} in D9", name);
                skipped.push(name.clone());
                continue;
            };
            let house = raw
                .house
                .as_deref()
                .and_then(|h| h.trim().parse::<i64>().ok())
                .and_then(valid_house);
            let sign = raw.sign.as_deref().and_then(|s| parse_sign(name, s));
            chart.d9.insert(planet, SignOnlyPosition { house, sign });
        }

        skipped.sort();
        skipped.dedup();

        let ascendant = self
            .houses
            .get("1")
            .and_then(|h| u8::try_from(h.sign_num).ok())
            .and_then(Sign::from_number)
            .or_else(|| chart.d1.get(&Planet::Ascendant).and_then(|p| p.sign));

        let birth = self.birth_details.as_ref().and_then(parse_birth);

        ChartAdapterOutput {
            chart,
            ascendant,
            birth,
            skipped,
        }
    }
}

impl CompatibilityResponse {
    /// Score the kutas and aggregate them in one pass.
    pub fn evaluate(&self, settings: &EngineSettings) -> CompatibilityReport {
        let doshas = self.dosha_summary.as_ref().map(|s| &s.details);
        let factors = crate::ashtakoot::score_factors(&self.kutas, doshas, settings);
        let summary = aggregate(&factors);
        CompatibilityReport { factors, summary }
    }
}

/// Parse a full-chart response.
pub fn parse_full_chart(json: &str) -> Result<FullChartResponse, PayloadError> {
    let response: FullChartResponse =
        serde_json::from_str(json).map_err(|e| PayloadError::InvalidJson(e.to_string()))?;

    for (name, planet) in &response.planets {
        if !(0.0..360.0).contains(&planet.degree) {
            return Err(PayloadError::InvalidField(format!(
                "planets.{}.degree must be within [0, 360), got {}",
                name, planet.degree
            )));
        }
    }
    Ok(response)
}

fn validate_kuta(index: usize, kuta: &KutaDetail) -> Result<(), PayloadError> {
    for (field, value) in [("points", kuta.points), ("maxPoints", kuta.max_points)] {
        if !value.is_finite() || value < 0.0 {
            return Err(PayloadError::InvalidField(format!(
                "kutas[{}].{} must be a non-negative number, got {}",
                index, field, value
            )));
        }
    }
    Ok(())
}

/// Parse a compatibility response.
pub fn parse_compatibility(json: &str) -> Result<CompatibilityResponse, PayloadError> {
    let response: CompatibilityResponse =
        serde_json::from_str(json).map_err(|e| PayloadError::InvalidJson(e.to_string()))?;

    for (index, kuta) in response.kutas.iter().enumerate() {
        validate_kuta(index, kuta)?;
    }
    Ok(response)
}
