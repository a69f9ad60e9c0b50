//! Adapters from the external chart and compatibility services.

pub mod loader;
pub mod types;

pub use loader::{
    parse_compatibility, parse_full_chart, BirthMoment, ChartAdapterOutput, CompatibilityReport,
    PayloadError,
};
pub use types::{CompatibilityResponse, DoshaSummary, FullChartResponse};
