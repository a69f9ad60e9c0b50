//! Vedic chart geometry and Ashtakoot compatibility engine.
//!
//! Everything here is a pure function of its inputs: chart payloads come in
//! already computed by an ephemeris service, and drawable chart models and
//! factor views come out. The only fallible operations are payload parsing
//! and settings validation.

pub mod ashtakoot;
pub mod chart;
pub mod layout;
pub mod payload;
pub mod settings;
pub mod zodiac;

pub use ashtakoot::{
    aggregate, score_factors, AshtakootFactorView, AshtakootScorer, CompatibilitySummary,
    DoshaDetail, KutaDetail, KutaKey, Rating, StatusColor,
};
pub use chart::{ChartData, ChartProjector, PlanetPosition, RenderableChart, SignOnlyPosition};
pub use payload::{parse_compatibility, parse_full_chart, PayloadError};
pub use settings::{ChartDivision, ChartStyle, EngineSettings, KutaMatching, SettingsError};
pub use zodiac::{house_for_sign, sign_for_house, Planet, Sign};
