pub mod data;
pub mod projector;
pub mod types;

pub use data::{ChartData, PlanetPosition, SignOnlyPosition};
pub use projector::ChartProjector;
pub use types::{
    NorthIndianChart, NorthIndianHouse, PlacedPlanet, RenderableChart, SouthIndianCell,
    SouthIndianChart,
};
