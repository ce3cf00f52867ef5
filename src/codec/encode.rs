use super::{Alphabet, ALPHABET};
use crate::{
    length::{Length, BITS},
    Error,
};

const MASK: u64 = (1 << BITS) - 1;

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<64>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'a Alphabet<64> {
        self.alphabet
    }

    /// Writes the `length` characters of `value` at the start of `output`, most significant first.
    pub fn encode_into(&self, value: u64, length: usize, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let length = Length::new(length)?;
        if !length.contains(value) {
            return Err(Error::ValueOutOfRange { length: length.get() });
        }
        let output = output.as_mut().get_mut(..length.get()).ok_or(Error::BufferTooSmall)?;
        for (index, character) in output.iter_mut().enumerate() {
            let shift = BITS * (length.get() - 1 - index);
            *character = self.alphabet.encode(((value >> shift) & MASK) as usize);
        }
        Ok(length.get())
    }

    pub fn encode(&self, value: u64, length: usize) -> Result<String, Error> {
        let mut output = [0u8; Length::MAX.get()];
        let len = self.encode_into(value, length, &mut output)?;
        Ok(output[..len].iter().map(|&character| char::from(character)).collect())
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode_into(value: u64, length: usize, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(value, length, output)
}

pub fn encode(value: u64, length: usize) -> Result<String, Error> {
    Encoder::default().encode(value, length)
}
