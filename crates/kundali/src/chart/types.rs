use crate::layout::{NormalizedPoint, SlotOffset};
use crate::settings::ChartDivision;
use crate::zodiac::{Planet, Sign};
use serde::{Deserialize, Serialize};

/// A planet label placed inside a North-Indian house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlanet {
    pub planet: Planet,
    pub code: String,
    /// Offset from the house centroid in chart-edge units. `None` for
    /// occupants past the last defined slot.
    pub offset: Option<SlotOffset>,
    pub retrograde: bool,
    pub vargottama: bool,
    pub combust: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NorthIndianHouse {
    pub house: u8,
    pub sign: Sign,
    pub sign_number: u8,
    pub is_wide: bool,
    pub centroid: NormalizedPoint,
    /// Side of the square content box, as a fraction of the chart edge.
    pub content_size: f32,
    pub planets: Vec<PlacedPlanet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NorthIndianChart {
    pub ascendant: Sign,
    pub division: ChartDivision,
    /// Always twelve entries, house 1 first.
    pub houses: Vec<NorthIndianHouse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SouthIndianCell {
    pub sign: Sign,
    pub row: u8,
    pub col: u8,
    /// House counted from the ascendant's cell.
    pub house: u8,
    pub is_ascendant: bool,
    pub planets: Vec<String>,
    /// `planets` wrapped into lines of at most three codes.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SouthIndianChart {
    pub ascendant: Sign,
    pub division: ChartDivision,
    /// The twelve rim cells in row-major order.
    pub cells: Vec<SouthIndianCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum RenderableChart {
    NorthIndian(NorthIndianChart),
    SouthIndian(SouthIndianChart),
}

impl RenderableChart {
    pub fn ascendant(&self) -> Sign {
        match self {
            RenderableChart::NorthIndian(chart) => chart.ascendant,
            RenderableChart::SouthIndian(chart) => chart.ascendant,
        }
    }

    pub fn as_north(&self) -> Option<&NorthIndianChart> {
        match self {
            RenderableChart::NorthIndian(chart) => Some(chart),
            RenderableChart::SouthIndian(_) => None,
        }
    }

    pub fn as_south(&self) -> Option<&SouthIndianChart> {
        match self {
            RenderableChart::SouthIndian(chart) => Some(chart),
            RenderableChart::NorthIndian(_) => None,
        }
    }
}
