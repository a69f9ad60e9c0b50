//! Zodiac signs and the modular arithmetic that rotates them through houses.
//!
//! Sign numbers are always 1-based (Aries = 1 .. Pisces = 12). Every rotation
//! wraps modulo 12 and never yields 0.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "Ar", alias = "Aries")]
    Aries,
    #[serde(rename = "Ta", alias = "Taurus")]
    Taurus,
    #[serde(rename = "Ge", alias = "Gemini")]
    Gemini,
    #[serde(rename = "Ca", alias = "Cancer")]
    Cancer,
    #[serde(rename = "Le", alias = "Leo")]
    Leo,
    #[serde(rename = "Vi", alias = "Virgo")]
    Virgo,
    #[serde(rename = "Li", alias = "Libra")]
    Libra,
    #[serde(rename = "Sc", alias = "Scorpio")]
    Scorpio,
    #[serde(rename = "Sg", alias = "Sagittarius")]
    Sagittarius,
    #[serde(rename = "Cp", alias = "Capricorn")]
    Capricorn,
    #[serde(rename = "Aq", alias = "Aquarius")]
    Aquarius,
    #[serde(rename = "Pi", alias = "Pisces")]
    Pisces,
}

// (sign, code, full name, glyph) in zodiacal order
const SIGN_TABLE: [(Sign, &str, &str, &str); 12] = [
    (Sign::Aries, "Ar", "Aries", "♈"),
    (Sign::Taurus, "Ta", "Taurus", "♉"),
    (Sign::Gemini, "Ge", "Gemini", "♊"),
    (Sign::Cancer, "Ca", "Cancer", "♋"),
    (Sign::Leo, "Le", "Leo", "♌"),
    (Sign::Virgo, "Vi", "Virgo", "♍"),
    (Sign::Libra, "Li", "Libra", "♎"),
    (Sign::Scorpio, "Sc", "Scorpio", "♏"),
    (Sign::Sagittarius, "Sg", "Sagittarius", "♐"),
    (Sign::Capricorn, "Cp", "Capricorn", "♑"),
    (Sign::Aquarius, "Aq", "Aquarius", "♒"),
    (Sign::Pisces, "Pi", "Pisces", "♓"),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Sign number, 1 (Aries) through 12 (Pisces).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn code(self) -> &'static str {
        SIGN_TABLE[self.index()].1
    }

    pub fn full_name(self) -> &'static str {
        SIGN_TABLE[self.index()].2
    }

    pub fn symbol(self) -> &'static str {
        SIGN_TABLE[self.index()].3
    }

    pub fn from_number(number: u8) -> Option<Sign> {
        match number {
            1..=12 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    /// Parse a two-letter code ("Ge") or a full English name ("Gemini"),
    /// ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Sign> {
        let code = code.trim();
        SIGN_TABLE
            .iter()
            .find(|(_, short, full, _)| {
                short.eq_ignore_ascii_case(code) || full.eq_ignore_ascii_case(code)
            })
            .map(|(sign, _, _, _)| *sign)
    }

    /// Rotate forward (or backward, for negative steps) through the zodiac.
    pub fn offset(self, steps: i32) -> Sign {
        let index = (self.index() as i32 + steps).rem_euclid(12);
        Self::ALL[index as usize]
    }

    /// Sign occupying `house` when this sign rises.
    pub fn for_house(self, house: u8) -> Sign {
        self.offset(house as i32 - 1)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Sign number (1-12) occupying `house` (1-12) for the given ascendant sign number.
///
/// House 1 holds the ascendant's sign and each following house advances one
/// sign, wrapping from Pisces back to Aries. An ascendant outside 1-12 is
/// treated as Aries so a malformed chart still renders; this is a degraded
/// mode, logged at warn level.
pub fn sign_for_house(ascendant_sign_number: u8, house: u8) -> u8 {
    let ascendant = if (1..=12).contains(&ascendant_sign_number) {
        ascendant_sign_number
    } else {
        log::warn!(
            "ascendant sign number {} out of range, falling back to Aries",
            ascendant_sign_number
        );
        1
    };
    let sign_index = (ascendant as i32 + house as i32 - 2).rem_euclid(12);
    sign_index as u8 + 1
}

/// House (1-12) holding `sign` when `ascendant` rises. Inverse of [`Sign::for_house`].
pub fn house_for_sign(ascendant: Sign, sign: Sign) -> u8 {
    (sign.number() as i32 - ascendant.number() as i32).rem_euclid(12) as u8 + 1
}

/// Resolve an ascendant code from upstream data, falling back to Aries when
/// it is missing or unrecognised.
pub fn resolve_ascendant(code: Option<&str>) -> Sign {
    match code.and_then(Sign::from_code) {
        Some(sign) => sign,
        None => {
            log::warn!("unrecognised ascendant {:?}, treating house 1 as Aries", code);
            Sign::Aries
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_for_house_range_and_permutation() {
        for asc in 1..=12u8 {
            let mut seen: Vec<u8> = (1..=12u8).map(|house| sign_for_house(asc, house)).collect();
            assert!(seen.iter().all(|s| (1..=12).contains(s)));
            seen.sort_unstable();
            assert_eq!(seen, (1..=12u8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_sign_for_house_identity() {
        for asc in 1..=12u8 {
            assert_eq!(sign_for_house(asc, 1), asc);
        }
    }

    #[test]
    fn test_sign_for_house_gemini_fourth() {
        // (3 + 4 - 2) % 12 + 1 = 6
        assert_eq!(sign_for_house(3, 4), 6);
        assert_eq!(Sign::from_number(sign_for_house(3, 4)), Some(Sign::Virgo));
    }

    #[test]
    fn test_sign_for_house_wraps_after_pisces() {
        assert_eq!(sign_for_house(12, 2), 1);
        assert_eq!(sign_for_house(11, 12), 10);
    }

    #[test]
    fn test_out_of_range_ascendant_falls_back_to_aries() {
        assert_eq!(sign_for_house(0, 1), 1);
        assert_eq!(sign_for_house(13, 5), 5);
    }

    #[test]
    fn test_house_for_sign_inverts_rotation() {
        for asc in Sign::ALL {
            for house in 1..=12u8 {
                assert_eq!(house_for_sign(asc, asc.for_house(house)), house);
            }
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Sign::from_code("Sg"), Some(Sign::Sagittarius));
        assert_eq!(Sign::from_code("cp"), Some(Sign::Capricorn));
        assert_eq!(Sign::from_code("Pisces"), Some(Sign::Pisces));
        assert_eq!(Sign::from_code("Xx"), None);
        assert_eq!(resolve_ascendant(Some("??")), Sign::Aries);
        assert_eq!(resolve_ascendant(None), Sign::Aries);
    }

    #[test]
    fn test_offset_wraps_both_ways() {
        assert_eq!(Sign::Pisces.offset(1), Sign::Aries);
        assert_eq!(Sign::Aries.offset(-1), Sign::Pisces);
        assert_eq!(Sign::Leo.offset(24), Sign::Leo);
    }
}
