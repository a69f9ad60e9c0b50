pub mod planet;
pub mod sign;

pub use planet::Planet;
pub use sign::{house_for_sign, resolve_ascendant, sign_for_house, Sign};
