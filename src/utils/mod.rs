//! Plate input: validation and the immutable digit sequence

mod digits;
mod errors;
mod validation;

pub use digits::DigitSequence;
pub use errors::PlateError;
pub use validation::{MIN_PLATE_DIGITS, validate_plate};
