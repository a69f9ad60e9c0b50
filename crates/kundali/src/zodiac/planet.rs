use serde::{Deserialize, Serialize};
use std::fmt;

/// Bodies the chart service reports. Declaration order is the display order
/// used for every per-house and per-sign planet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Ascendant,
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
}

// (planet, service name, display code)
const PLANET_TABLE: [(Planet, &str, &str); 13] = [
    (Planet::Ascendant, "Ascendant", "As"),
    (Planet::Sun, "Sun", "Su"),
    (Planet::Moon, "Moon", "Mo"),
    (Planet::Mars, "Mars", "Ma"),
    (Planet::Mercury, "Mercury", "Me"),
    (Planet::Jupiter, "Jupiter", "Ju"),
    (Planet::Venus, "Venus", "Ve"),
    (Planet::Saturn, "Saturn", "Sa"),
    (Planet::Rahu, "Rahu", "Ra"),
    (Planet::Ketu, "Ketu", "Ke"),
    (Planet::Uranus, "Uranus", "Ur"),
    (Planet::Neptune, "Neptune", "Ne"),
    (Planet::Pluto, "Pluto", "Pl"),
];

impl Planet {
    pub const ALL: [Planet; 13] = [
        Planet::Ascendant,
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn name(self) -> &'static str {
        PLANET_TABLE[self as usize].1
    }

    /// Two-letter code drawn inside chart houses.
    pub fn code(self) -> &'static str {
        PLANET_TABLE[self as usize].2
    }

    pub fn from_name(name: &str) -> Option<Planet> {
        let name = name.trim();
        PLANET_TABLE
            .iter()
            .find(|(_, full, _)| full.eq_ignore_ascii_case(name))
            .map(|(planet, _, _)| *planet)
    }

    /// Uranus, Neptune and Pluto are only drawn when outer planets are enabled.
    pub fn is_outer(self) -> bool {
        matches!(self, Planet::Uranus | Planet::Neptune | Planet::Pluto)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
