use log::{debug, warn};

use crate::utils::errors::PlateError;

/// Fewest digits that still leave room for one `=` with a digit on each side.
pub const MIN_PLATE_DIGITS: usize = 2;

/// # Errors
///
/// Returns an error if the plate is empty, contains any non-ASCII-digit
/// character, or is too short to be split into two sides.
pub fn validate_plate(plate: &str) -> Result<(), PlateError> {
    debug!("Validating plate: '{}'", plate);

    if plate.is_empty() {
        warn!("Plate is empty");
        return Err(PlateError::EmptyPlate);
    }

    if let Some((position, found)) = plate.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
    {
        warn!(
            "Plate '{}' contains non-digit character {:?} at position {}",
            plate, found, position
        );
        return Err(PlateError::InvalidDigit { found, position });
    }

    let length = plate.len();
    if length < MIN_PLATE_DIGITS {
        warn!("Plate '{}' is too short to split", plate);
        return Err(PlateError::TooShort {
            length,
            min: MIN_PLATE_DIGITS,
        });
    }

    debug!("Plate validation successful");
    Ok(())
}
