pub mod north;
pub mod south;

pub use north::{
    centroid_for, centroid_with_margin, clearance, house_region, is_wide_house, slot_offsets,
    HouseRegion, NormalizedPoint, SlotOffset, HOUSE_MARGIN, MAX_SLOTS, WIDE_HOUSES,
};
pub use south::{cell_for_sign, occupied_cells, sign_at, GridCell, SOUTH_INDIAN_LAYOUT};
