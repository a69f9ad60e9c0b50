use crate::ashtakoot::scorer::ratio_status;
use crate::ashtakoot::types::{AshtakootFactorView, KutaKey, StatusColor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    VeryGood,
    Good,
    Average,
    NeedsAttention,
    NotRecommended,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::NeedsAttention => "Needs Attention",
            Rating::NotRecommended => "Not Recommended",
        }
    }

    /// Rating and star count for a percentage in 0..=100.
    fn for_percentage(percentage: f64) -> (Rating, u8) {
        match percentage {
            p if p >= 90.0 => (Rating::Excellent, 5),
            p if p >= 75.0 => (Rating::VeryGood, 4),
            p if p >= 60.0 => (Rating::Good, 3),
            p if p >= 50.0 => (Rating::Average, 2),
            _ => (Rating::NeedsAttention, 1),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilitySummary {
    /// Sum of the service's points, before any dosha adjustment.
    pub raw_total: f64,
    /// Sum of effective points.
    pub total: f64,
    pub max: f64,
    /// `total / max` as a percentage; 0 when `max` is 0.
    pub percentage: f64,
    pub status: StatusColor,
    pub recommended: bool,
    pub rating: Rating,
    pub stars: u8,
    pub critical_failures: Vec<KutaKey>,
}

/// Combine factor views into an overall verdict.
///
/// The status is the ratio classification of `total / max`, except that any
/// critical failure forces it to red.
pub fn aggregate(factors: &[AshtakootFactorView]) -> CompatibilitySummary {
    let raw_total: f64 = factors.iter().map(|f| f.score).sum();
    let total: f64 = factors.iter().map(|f| f.effective_score()).sum();
    let max: f64 = factors.iter().map(|f| f.max_score).sum();
    let percentage = if max > 0.0 { total / max * 100.0 } else { 0.0 };

    let critical_failures: Vec<KutaKey> = factors
        .iter()
        .filter(|f| f.is_critical_failure())
        .map(|f| f.key)
        .collect();
    let recommended = critical_failures.is_empty();

    let status = if recommended {
        ratio_status(total, max)
    } else {
        log::debug!("critical factors failed: {:?}", critical_failures);
        StatusColor::Red
    };

    let (rating, stars) = if recommended {
        Rating::for_percentage(percentage)
    } else {
        (Rating::NotRecommended, 1)
    };

    CompatibilitySummary {
        raw_total,
        total,
        max,
        percentage,
        status,
        recommended,
        rating,
        stars,
        critical_failures,
    }
}
