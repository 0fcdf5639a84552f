use thiserror::Error;

/// Errors raised while turning a raw plate string into a digit sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlateError {
    #[error("Plate cannot be empty")]
    EmptyPlate,
    #[error("Plate must contain only digits: found {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },
    #[error("Plate needs at least {min} digits to place an equals sign, got {length}")]
    TooShort { length: usize, min: usize },
}
