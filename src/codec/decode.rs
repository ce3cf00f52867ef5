use super::{Alphabet, ALPHABET};
use crate::{
    length::{Length, BITS},
    Error,
};

/// The accumulator takes one more character only while it is below `1 << OVERFLOW_SHIFT`.
const OVERFLOW_SHIFT: usize = u64::BITS as usize - BITS;

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<64>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>) -> Self {
        Self { alphabet }
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<u64, Error> {
        let input = input.as_ref();
        let length = Length::new(input.chars().count())?;
        let mut value: u64 = 0;
        for (index, character) in input.chars().enumerate() {
            let digit = self.alphabet.decode(character, index)?;
            if value >> OVERFLOW_SHIFT != 0 {
                return Err(Error::ValueOutOfRange { length: length.get() });
            }
            value = (value << BITS) | u64::from(digit);
        }
        Ok(value)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<str>) -> Result<u64, Error> {
    Decoder::default().decode(input)
}
