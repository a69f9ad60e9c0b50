//! Ashtakoot compatibility types: the eight kuta factors, the raw records
//! received from the matching service and the per-factor display model.

use crate::settings::KutaMatching;
use serde::{Deserialize, Serialize};

/// The eight kutas in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KutaKey {
    Varna,
    Vashya,
    Tara,
    Yoni,
    Maitri,
    Gana,
    Bhakoot,
    Nadi,
}

// (factor, wire key, classical max points, semantic label, icon reference)
const KUTA_TABLE: [(KutaKey, &str, f64, &str, &str); 8] = [
    (KutaKey::Varna, "varna", 1.0, "Work & Ego", "briefcase.fill"),
    (KutaKey::Vashya, "vashya", 2.0, "Dominance", "bolt.heart.fill"),
    (KutaKey::Tara, "tara", 3.0, "Destiny", "star.fill"),
    (KutaKey::Yoni, "yoni", 4.0, "Intimacy", "flame.fill"),
    (KutaKey::Maitri, "maitri", 5.0, "Friendship", "person.2.fill"),
    (KutaKey::Gana, "gana", 6.0, "Temperament", "theatermasks.fill"),
    (KutaKey::Bhakoot, "bhakoot", 7.0, "Love", "heart.circle.fill"),
    (KutaKey::Nadi, "nadi", 8.0, "Health", "waveform.path.ecg"),
];

impl KutaKey {
    pub const ALL: [KutaKey; 8] = [
        KutaKey::Varna,
        KutaKey::Vashya,
        KutaKey::Tara,
        KutaKey::Yoni,
        KutaKey::Maitri,
        KutaKey::Gana,
        KutaKey::Bhakoot,
        KutaKey::Nadi,
    ];

    pub fn key(self) -> &'static str {
        KUTA_TABLE[self as usize].1
    }

    /// Classical maximum; the full set sums to 36.
    pub fn max_points(self) -> f64 {
        KUTA_TABLE[self as usize].2
    }

    pub fn label(self) -> &'static str {
        KUTA_TABLE[self as usize].3
    }

    pub fn icon(self) -> &'static str {
        KUTA_TABLE[self as usize].4
    }

    /// A zero on Nadi or Bhakoot breaks the match regardless of the total.
    pub fn is_critical(self) -> bool {
        matches!(self, KutaKey::Nadi | KutaKey::Bhakoot)
    }

    pub fn matches(self, name: &str, matching: KutaMatching) -> bool {
        let name = name.trim().to_lowercase();
        match matching {
            KutaMatching::Prefix => name.starts_with(self.key()),
            KutaMatching::Exact => name == self.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<KutaKey> {
        Self::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// A kuta record as returned by the matching service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KutaDetail {
    pub name: String,
    pub points: f64,
    #[serde(rename = "maxPoints", alias = "max_points")]
    pub max_points: f64,
    #[serde(default)]
    pub description: String,
}

/// Dosha flags for one factor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoshaDetail {
    #[serde(default)]
    pub present: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(rename = "reasonShort", default, skip_serializing_if = "Option::is_none")]
    pub reason_short: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Red,
    Yellow,
    Green,
}

/// Display-ready view of one factor. Rebuilt on every scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AshtakootFactorView {
    pub key: KutaKey,
    pub label: String,
    pub icon: String,
    pub score: f64,
    pub max_score: f64,
    pub status: StatusColor,
    pub dosha_present: bool,
    pub dosha_cancelled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    pub description: String,
    pub narrative: String,
    /// Display copy of [`AshtakootFactorView::is_critical_failure`] taken
    /// when the view was built. Aggregation re-derives it.
    pub critical_failure: bool,
}

impl AshtakootFactorView {
    /// Adjusted score when a dosha applies, else the raw score.
    pub fn effective_score(&self) -> f64 {
        self.adjusted_score.unwrap_or(self.score)
    }

    /// Nadi or Bhakoot factor that is red and contributes no points.
    pub fn is_critical_failure(&self) -> bool {
        self.key.is_critical()
            && self.status == StatusColor::Red
            && self.effective_score() == 0.0
    }
}
