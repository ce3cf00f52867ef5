use crate::{
    codec::{Decoder, Encoder},
    Error, Length,
};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str};

/// An identifier value together with the number of characters it is written with.
///
/// Ordering compares the length first and the value second.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Livid {
    length: Length,
    value: u64,
}

impl Livid {
    pub fn new(value: u64, length: usize) -> Result<Self, Error> {
        let length = Length::new(length)?;
        if !length.contains(value) {
            return Err(Error::ValueOutOfRange { length: length.get() });
        }
        Ok(Self { length, value })
    }

    /// Callers guarantee that `length` contains `value`.
    pub(crate) const fn from_parts(value: u64, length: Length) -> Self {
        Self { length, value }
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn length(&self) -> Length {
        self.length
    }
}

impl fmt::Display for Livid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = [0u8; Length::MAX.get()];
        let len = Encoder::default()
            .encode_into(self.value, self.length.get(), &mut output)
            .map_err(|_| fmt::Error)?;
        f.write_str(str::from_utf8(&output[..len]).map_err(|_| fmt::Error)?)
    }
}

impl str::FromStr for Livid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        let value = Decoder::default().decode(input)?;
        let length = Length::new(input.chars().count())?;
        Ok(Self { length, value })
    }
}

impl TryFrom<String> for Livid {
    type Error = Error;

    fn try_from(input: String) -> Result<Self, Error> {
        input.parse()
    }
}

impl From<Livid> for String {
    fn from(livid: Livid) -> Self {
        livid.to_string()
    }
}

impl From<Livid> for u64 {
    fn from(livid: Livid) -> Self {
        livid.value
    }
}
