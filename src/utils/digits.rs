use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::utils::errors::PlateError;
use crate::utils::validation::validate_plate;

/// The ordered digits of one plate.
///
/// Built once from validated input and never mutated; the position of each
/// digit is what the expression trees index into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// # Errors
    ///
    /// Returns an error if the plate is empty, holds a non-digit character,
    /// or has fewer than two digits.
    pub fn parse(plate: &str) -> Result<Self, PlateError> {
        validate_plate(plate)?;

        let digits: Vec<u8> = plate.bytes().map(|b| b - b'0').collect();
        debug!("Parsed plate '{}' into {} digits", plate, digits.len());
        Ok(Self { digits })
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at `position`, if in bounds.
    pub fn get(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }
}

impl FromStr for DigitSequence {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
