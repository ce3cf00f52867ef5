use crate::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the encoded string.
    BufferTooSmall,
    InvalidLength { length: usize },
    InvalidCharacter { character: char, index: usize },
    ValueOutOfRange { length: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidLength { length } => write!(f, "Invalid length {} (expected 1 to 11)", length),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
            Self::ValueOutOfRange { length } => write!(f, "Value out of range for length {}", length),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}
