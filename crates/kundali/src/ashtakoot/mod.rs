//! Ashtakoot (eight-factor) compatibility scoring.

pub mod aggregate;
pub mod narrative;
pub mod scorer;
pub mod types;

pub use aggregate::{aggregate, CompatibilitySummary, Rating};
pub use narrative::{narrative, personalize};
pub use scorer::{lookup_dosha, ratio_status, score_factors, status_for, AshtakootScorer};
pub use types::{AshtakootFactorView, DoshaDetail, KutaDetail, KutaKey, StatusColor};
