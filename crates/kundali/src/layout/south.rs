//! South-Indian grid chart geometry.
//!
//! Signs occupy fixed cells around the rim of a 4x4 grid, starting with
//! Pisces in the top-left corner and running clockwise. The center 2x2 block
//! is reserved and never holds a sign. Houses are implied by counting from
//! the ascendant's cell.

use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u8,
    pub col: u8,
}

const fn cell(row: u8, col: u8) -> GridCell {
    GridCell { row, col }
}

pub const SOUTH_INDIAN_LAYOUT: [[Option<Sign>; GRID_SIZE]; GRID_SIZE] = [
    [Some(Sign::Pisces), Some(Sign::Aries), Some(Sign::Taurus), Some(Sign::Gemini)],
    [Some(Sign::Aquarius), None, None, Some(Sign::Cancer)],
    [Some(Sign::Capricorn), None, None, Some(Sign::Leo)],
    [Some(Sign::Sagittarius), Some(Sign::Scorpio), Some(Sign::Libra), Some(Sign::Virgo)],
];

// Indexed by sign number - 1
const SIGN_CELLS: [GridCell; 12] = [
    cell(0, 1), // Ar
    cell(0, 2), // Ta
    cell(0, 3), // Ge
    cell(1, 3), // Ca
    cell(2, 3), // Le
    cell(3, 3), // Vi
    cell(3, 2), // Li
    cell(3, 1), // Sc
    cell(3, 0), // Sg
    cell(2, 0), // Cp
    cell(1, 0), // Aq
    cell(0, 0), // Pi
];

pub fn cell_for_sign(sign: Sign) -> GridCell {
    SIGN_CELLS[sign.number() as usize - 1]
}

pub fn is_reserved(row: usize, col: usize) -> bool {
    (row == 1 || row == 2) && (col == 1 || col == 2)
}

pub fn sign_at(row: usize, col: usize) -> Option<Sign> {
    if is_reserved(row, col) {
        return None;
    }
    SOUTH_INDIAN_LAYOUT.get(row)?.get(col).copied().flatten()
}

/// Occupied cells in row-major order.
pub fn occupied_cells() -> impl Iterator<Item = (GridCell, Sign)> {
    (0..GRID_SIZE).flat_map(|row| {
        (0..GRID_SIZE).filter_map(move |col| {
            sign_at(row, col).map(|sign| (cell(row as u8, col as u8), sign))
        })
    })
}
