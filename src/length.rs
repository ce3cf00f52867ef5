use crate::Error;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Number of bits carried by one character.
pub const BITS: usize = 6;

/// Character count of an encoded identifier, between [`Length::MIN`] and [`Length::MAX`].
///
/// Eleven characters hold 66 bits, so the longest length is capped to the 64 bits of a `u64`
/// instead of its full character capacity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Length(usize);

impl Length {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(11);

    pub const fn new(length: usize) -> Result<Self, Error> {
        if length < Self::MIN.0 || length > Self::MAX.0 {
            return Err(Error::InvalidLength { length });
        }
        Ok(Self(length))
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn bits(self) -> usize {
        self.0 * BITS
    }

    /// Largest value representable with this many characters.
    pub const fn max_value(self) -> u64 {
        if self.bits() >= u64::BITS as usize {
            u64::MAX
        } else {
            (1u64 << self.bits()) - 1
        }
    }

    pub const fn contains(self, value: u64) -> bool {
        value <= self.max_value()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<usize> for Length {
    type Error = Error;

    fn try_from(length: usize) -> Result<Self, Error> {
        Self::new(length)
    }
}

impl From<Length> for usize {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
