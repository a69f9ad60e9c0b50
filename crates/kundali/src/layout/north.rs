//! North-Indian diamond chart geometry.
//!
//! The chart is the unit square with both diagonals and an inner diamond
//! through the edge midpoints. Coordinates are normalized to [0, 1] with y
//! growing downward. Houses never move; only the sign shown in each house
//! rotates with the ascendant.
//!
//! House 1 is the top diamond below the top edge's midpoint; houses then run
//! counter-clockwise: 2 and 3 share the top-left corner, 4 is the left
//! diamond, 5 and 6 share the bottom-left corner, 7 is the bottom diamond,
//! 8 and 9 share the bottom-right corner, 10 is the right diamond and 11 and
//! 12 share the top-right corner.

use serde::{Deserialize, Serialize};

/// Inward margin applied to each centroid so content never touches a grid line.
pub const HOUSE_MARGIN: f32 = 0.03;

/// Houses whose region is a full quarter diamond rather than a corner triangle.
pub const WIDE_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Slot layouts are only defined up to this many occupants per house.
pub const MAX_SLOTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

/// Offset of a planet label from its house centroid, in chart-edge units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotOffset {
    pub dx: f32,
    pub dy: f32,
}

const fn pt(x: f32, y: f32) -> NormalizedPoint {
    NormalizedPoint { x, y }
}

const TL: NormalizedPoint = pt(0.0, 0.0);
const TR: NormalizedPoint = pt(1.0, 0.0);
const BL: NormalizedPoint = pt(0.0, 1.0);
const BR: NormalizedPoint = pt(1.0, 1.0);
const T: NormalizedPoint = pt(0.5, 0.0);
const R: NormalizedPoint = pt(1.0, 0.5);
const B: NormalizedPoint = pt(0.5, 1.0);
const L: NormalizedPoint = pt(0.0, 0.5);
const C: NormalizedPoint = pt(0.5, 0.5);
// Where the diagonals cross the diamond edges
const I_TL: NormalizedPoint = pt(0.25, 0.25);
const I_TR: NormalizedPoint = pt(0.75, 0.25);
const I_BL: NormalizedPoint = pt(0.25, 0.75);
const I_BR: NormalizedPoint = pt(0.75, 0.75);

/// Static geometry of one house.
#[derive(Debug, Clone, Copy)]
pub struct HouseRegion {
    pub house: u8,
    /// Mean of the anchoring triangle's three vertices.
    pub base_centroid: NormalizedPoint,
    /// Unit step (per axis) pointing away from the outer edge the house touches.
    pub inward: (f32, f32),
    /// Boundary polygon as drawn by the grid lines, in winding order.
    pub vertices: &'static [NormalizedPoint],
}

const ONE_SIXTH: f32 = 1.0 / 6.0;
const FIVE_SIXTHS: f32 = 5.0 / 6.0;
const ONE_TWELFTH: f32 = 1.0 / 12.0;
const ELEVEN_TWELFTHS: f32 = 11.0 / 12.0;

// Wide houses are anchored on the triangle between their outer vertex and the
// two diagonal crossings; their drawn region extends to the chart center.
const HOUSE_REGIONS: [HouseRegion; 12] = [
    HouseRegion {
        house: 1,
        base_centroid: pt(0.5, ONE_SIXTH),
        inward: (0.0, 1.0),
        vertices: &[T, I_TL, C, I_TR],
    },
    HouseRegion {
        house: 2,
        base_centroid: pt(0.25, ONE_TWELFTH),
        inward: (0.0, 1.0),
        vertices: &[TL, T, I_TL],
    },
    HouseRegion {
        house: 3,
        base_centroid: pt(ONE_TWELFTH, 0.25),
        inward: (1.0, 0.0),
        vertices: &[TL, I_TL, L],
    },
    HouseRegion {
        house: 4,
        base_centroid: pt(ONE_SIXTH, 0.5),
        inward: (1.0, 0.0),
        vertices: &[L, I_TL, C, I_BL],
    },
    HouseRegion {
        house: 5,
        base_centroid: pt(ONE_TWELFTH, 0.75),
        inward: (1.0, 0.0),
        vertices: &[L, I_BL, BL],
    },
    HouseRegion {
        house: 6,
        base_centroid: pt(0.25, ELEVEN_TWELFTHS),
        inward: (0.0, -1.0),
        vertices: &[BL, I_BL, B],
    },
    HouseRegion {
        house: 7,
        base_centroid: pt(0.5, FIVE_SIXTHS),
        inward: (0.0, -1.0),
        vertices: &[B, I_BL, C, I_BR],
    },
    HouseRegion {
        house: 8,
        base_centroid: pt(0.75, ELEVEN_TWELFTHS),
        inward: (0.0, -1.0),
        vertices: &[B, I_BR, BR],
    },
    HouseRegion {
        house: 9,
        base_centroid: pt(ELEVEN_TWELFTHS, 0.75),
        inward: (-1.0, 0.0),
        vertices: &[BR, I_BR, R],
    },
    HouseRegion {
        house: 10,
        base_centroid: pt(FIVE_SIXTHS, 0.5),
        inward: (-1.0, 0.0),
        vertices: &[R, I_BR, C, I_TR],
    },
    HouseRegion {
        house: 11,
        base_centroid: pt(ELEVEN_TWELFTHS, 0.25),
        inward: (-1.0, 0.0),
        vertices: &[R, I_TR, TR],
    },
    HouseRegion {
        house: 12,
        base_centroid: pt(0.75, ONE_TWELFTH),
        inward: (0.0, 1.0),
        vertices: &[TR, I_TR, T],
    },
];

pub fn house_region(house: u8) -> Option<&'static HouseRegion> {
    match house {
        1..=12 => Some(&HOUSE_REGIONS[house as usize - 1]),
        _ => None,
    }
}

pub fn is_wide_house(house: u8) -> bool {
    WIDE_HOUSES.contains(&house)
}

/// Label anchor for `house` using the standard [`HOUSE_MARGIN`].
pub fn centroid_for(house: u8) -> Option<NormalizedPoint> {
    centroid_with_margin(house, HOUSE_MARGIN)
}

pub fn centroid_with_margin(house: u8, margin: f32) -> Option<NormalizedPoint> {
    house_region(house).map(|region| NormalizedPoint {
        x: region.base_centroid.x + region.inward.0 * margin,
        y: region.base_centroid.y + region.inward.1 * margin,
    })
}

/// Deterministic label offsets for `count` planets sharing a house.
///
/// One planet sits on the centroid, two side by side, three in a triangle.
/// Four to eight use an eight-point ring: four inner diagonal points first,
/// then four cardinal points (pulled in for the narrower corner houses).
/// At most [`MAX_SLOTS`] offsets are returned; no layout exists for a ninth
/// occupant.
pub fn slot_offsets(count: usize, is_wide_house: bool, radius: f32) -> Vec<SlotOffset> {
    let off = |dx: f32, dy: f32| SlotOffset { dx, dy };

    match count {
        0 => Vec::new(),
        1 => vec![off(0.0, 0.0)],
        2 => vec![off(-radius * 0.5, 0.0), off(radius * 0.5, 0.0)],
        3 => vec![
            off(0.0, -radius * 0.5),
            off(-radius * 0.6, radius * 0.4),
            off(radius * 0.6, radius * 0.4),
        ],
        _ => {
            let r1 = radius * 0.5;
            let r2 = radius * 0.9;
            let mut points = vec![off(-r1, -r1), off(r1, -r1), off(-r1, r1), off(r1, r1)];
            if is_wide_house {
                points.extend([off(0.0, -r2), off(0.0, r2), off(-r2, 0.0), off(r2, 0.0)]);
            } else {
                points.extend([
                    off(0.0, -r2 * 0.8),
                    off(0.0, r2 * 0.8),
                    off(-r2 * 0.6, 0.0),
                    off(r2 * 0.6, 0.0),
                ]);
            }
            points.truncate(count.min(MAX_SLOTS));
            points
        }
    }
}

/// Signed distance from `p` to the segment line a-b; positive on the left
/// when walking a -> b with y pointing down.
fn edge_distance(a: NormalizedPoint, b: NormalizedPoint, p: NormalizedPoint) -> f32 {
    let (ex, ey) = (b.x - a.x, b.y - a.y);
    let cross = ex * (p.y - a.y) - ey * (p.x - a.x);
    cross / (ex * ex + ey * ey).sqrt()
}

/// Smallest distance from `point` to the boundary of `house`, or `None` when
/// the point is not strictly inside the region.
pub fn clearance(house: u8, point: NormalizedPoint) -> Option<f32> {
    let region = house_region(house)?;
    let n = region.vertices.len();
    let distances: Vec<f32> = (0..n)
        .map(|i| edge_distance(region.vertices[i], region.vertices[(i + 1) % n], point))
        .collect();

    let all_positive = distances.iter().all(|d| *d > 0.0);
    let all_negative = distances.iter().all(|d| *d < 0.0);
    if !(all_positive || all_negative) {
        return None;
    }
    distances.into_iter().map(f32::abs).reduce(f32::min)
}
