//! Projection of raw planet placements onto a drawable chart model.

use crate::chart::data::{ChartData, SignOnlyPosition};
use crate::chart::types::{
    NorthIndianChart, NorthIndianHouse, PlacedPlanet, RenderableChart, SouthIndianCell,
    SouthIndianChart,
};
use crate::layout::{self, MAX_SLOTS};
use crate::settings::{ChartDivision, ChartStyle, EngineSettings};
use crate::zodiac::{house_for_sign, resolve_ascendant, sign_for_house, Planet, Sign};

const WIDE_CONTENT_SIZE: f32 = 0.22;
const CORNER_CONTENT_SIZE: f32 = 0.15;
const WIDE_SLOT_RADIUS: f32 = 0.35;
const CORNER_SLOT_RADIUS: f32 = 0.40;
const SOUTH_CODES_PER_ROW: usize = 3;

/// Stateless projector bound to a settings context.
#[derive(Debug, Clone, Copy)]
pub struct ChartProjector<'a> {
    settings: &'a EngineSettings,
}

impl<'a> ChartProjector<'a> {
    pub fn new(settings: &'a EngineSettings) -> Self {
        Self { settings }
    }

    /// Project `chart` in `style`. An unknown or missing ascendant code is
    /// treated as Aries.
    pub fn project(
        &self,
        chart: &ChartData,
        ascendant: Option<&str>,
        style: ChartStyle,
    ) -> RenderableChart {
        let ascendant = resolve_ascendant(ascendant);
        match style {
            ChartStyle::NorthIndian => {
                RenderableChart::NorthIndian(self.project_north(chart, ascendant))
            }
            ChartStyle::SouthIndian => {
                RenderableChart::SouthIndian(self.project_south(chart, ascendant))
            }
        }
    }

    /// Project using the style configured in the settings.
    pub fn project_default(&self, chart: &ChartData, ascendant: Option<&str>) -> RenderableChart {
        self.project(chart, ascendant, self.settings.chart_style)
    }

    fn visible_placements(&self, chart: &ChartData) -> Vec<(Planet, SignOnlyPosition)> {
        chart
            .placements(self.settings.division)
            .into_iter()
            .filter(|(planet, _)| self.settings.include_outer_planets || !planet.is_outer())
            .collect()
    }

    fn placed(&self, chart: &ChartData, planet: Planet) -> PlacedPlanet {
        // Status flags only exist on the birth chart
        let flags = match self.settings.division {
            ChartDivision::D1 => chart.d1.get(&planet),
            ChartDivision::D9 => None,
        };
        PlacedPlanet {
            planet,
            code: planet.code().to_string(),
            offset: None,
            retrograde: flags.map_or(false, |p| p.retrograde),
            vargottama: flags.map_or(false, |p| p.vargottama),
            combust: flags.map_or(false, |p| p.combust),
        }
    }

    pub fn project_north(&self, chart: &ChartData, ascendant: Sign) -> NorthIndianChart {
        let placements = self.visible_placements(chart);

        let houses = (1..=12u8)
            .filter_map(|house| {
                let centroid = layout::centroid_with_margin(house, self.settings.house_margin)?;
                let sign = Sign::from_number(sign_for_house(ascendant.number(), house))?;
                let is_wide = layout::is_wide_house(house);
                let content_size = if is_wide {
                    WIDE_CONTENT_SIZE
                } else {
                    CORNER_CONTENT_SIZE
                };
                let radius = content_size
                    * if is_wide {
                        WIDE_SLOT_RADIUS
                    } else {
                        CORNER_SLOT_RADIUS
                    };

                let occupants: Vec<Planet> = placements
                    .iter()
                    .filter(|(_, pos)| pos.house == Some(house))
                    .map(|(planet, _)| *planet)
                    .collect();

                if occupants.len() > MAX_SLOTS {
                    log::warn!(
                        "house {} holds {} planets; only {} have slot positions",
                        house,
                        occupants.len(),
                        MAX_SLOTS
                    );
                }

                let offsets = layout::slot_offsets(occupants.len(), is_wide, radius);
                let planets = occupants
                    .into_iter()
                    .enumerate()
                    .map(|(index, planet)| PlacedPlanet {
                        offset: offsets.get(index).copied(),
                        ..self.placed(chart, planet)
                    })
                    .collect();

                Some(NorthIndianHouse {
                    house,
                    sign,
                    sign_number: sign.number(),
                    is_wide,
                    centroid,
                    content_size,
                    planets,
                })
            })
            .collect();

        NorthIndianChart {
            ascendant,
            division: self.settings.division,
            houses,
        }
    }

    pub fn project_south(&self, chart: &ChartData, ascendant: Sign) -> SouthIndianChart {
        let placements = self.visible_placements(chart);

        let cells = layout::occupied_cells()
            .map(|(cell, sign)| {
                let planets: Vec<String> = placements
                    .iter()
                    .filter(|(_, pos)| pos.sign == Some(sign))
                    .map(|(planet, _)| planet.code().to_string())
                    .collect();
                let rows = planets
                    .chunks(SOUTH_CODES_PER_ROW)
                    .map(|chunk| chunk.to_vec())
                    .collect();

                SouthIndianCell {
                    sign,
                    row: cell.row,
                    col: cell.col,
                    house: house_for_sign(ascendant, sign),
                    is_ascendant: sign == ascendant,
                    planets,
                    rows,
                }
            })
            .collect();

        SouthIndianChart {
            ascendant,
            division: self.settings.division,
            cells,
        }
    }
}
