//! Uniform random identifiers.
//!
//! [`random_str`] picks every character independently, so an eleven character string covers the
//! whole 66 bit space and may not decode. It is meant to exercise both sides of the decoder.

use crate::{
    codec::Encoder,
    configuration::{self, Configuration},
    Error, Length, Livid,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn int<R: Rng + ?Sized>(rng: &mut R, length: Length) -> u64 {
    rng.gen::<u64>() & length.max_value()
}

fn string<R: Rng + ?Sized>(rng: &mut R, length: Length) -> String {
    let alphabet = Encoder::default().alphabet();
    (0..length.get())
        .map(|_| char::from(alphabet.encode(rng.gen_range(0..alphabet.len()))))
        .collect()
}

pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<u64, Error> {
    Ok(int(rng, Length::new(length)?))
}

pub fn random_str_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String, Error> {
    Ok(string(rng, Length::new(length)?))
}

pub fn random_int(length: usize) -> Result<u64, Error> {
    random_int_with(&mut rand::thread_rng(), length)
}

pub fn random_str(length: usize) -> Result<String, Error> {
    random_str_with(&mut rand::thread_rng(), length)
}

/// Owns its random source and produces identifiers of a single length.
pub struct Generator<R = StdRng> {
    rng: R,
    length: Length,
}

impl Generator {
    pub fn from_configuration(configuration: &Configuration) -> Self {
        let rng = match configuration.seed() {
            Some(seed) => {
                log::debug!("Seeding generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                log::debug!("Seeding generator from entropy");
                StdRng::from_entropy()
            }
        };
        Self::new(rng, configuration.length())
    }

    pub fn from_env() -> Result<Self, configuration::Error> {
        Ok(Self::from_configuration(&Configuration::from_env()?))
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, length: Length) -> Self {
        Self { rng, length }
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn int(&mut self) -> u64 {
        int(&mut self.rng, self.length)
    }

    /// May not decode when the length is 11, see the module documentation.
    pub fn string(&mut self) -> String {
        string(&mut self.rng, self.length)
    }

    pub fn livid(&mut self) -> Livid {
        Livid::from_parts(self.int(), self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::{random_int, random_int_with, random_str, random_str_with, Generator};
    use crate::{decode, encode, Configuration, Error, Length};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_int_roundtrip() {
        for length in Length::all() {
            for _ in 0..1000 {
                let value = random_int(length.get()).unwrap();
                assert!(length.contains(value));
                let encoded = encode(value, length.get()).unwrap();
                assert_eq!(decode(&encoded), Ok(value));
            }
        }
    }

    #[test]
    fn random_str_roundtrip() {
        for length in [1, 5, 10] {
            for _ in 0..500 {
                let input = random_str(length).unwrap();
                let value = decode(&input).unwrap();
                assert_eq!(encode(value, length), Ok(input));
            }
        }
    }

    #[test]
    fn random_str_of_length_11() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut overflows = 0;
        for _ in 0..500 {
            let input = random_str_with(&mut rng, 11).unwrap();
            assert_eq!(input.len(), 11);
            match decode(&input) {
                Ok(value) => assert_eq!(encode(value, 11), Ok(input)),
                Err(error) => {
                    assert_eq!(error, Error::ValueOutOfRange { length: 11 });
                    overflows += 1;
                }
            }
        }
        // Three in four leading characters overflow.
        assert!(overflows > 250 && overflows < 500);
    }

    #[test]
    fn invalid_length() {
        assert_eq!(random_int(0), Err(Error::InvalidLength { length: 0 }));
        assert_eq!(random_str(12), Err(Error::InvalidLength { length: 12 }));
        assert_eq!(random_int_with(&mut rand::thread_rng(), 12), Err(Error::InvalidLength { length: 12 }));
    }

    #[test]
    fn seeded_generator() {
        let configuration = Configuration::new(Length::new(5).unwrap(), Some(42));
        let mut first = Generator::from_configuration(&configuration);
        let mut second = Generator::from_configuration(&configuration);
        for _ in 0..100 {
            let livid = first.livid();
            assert_eq!(livid, second.livid());
            assert_eq!(livid.length(), first.length());
            assert_eq!(livid.to_string().parse(), Ok(livid));
            assert_eq!(first.string().len(), 5);
            second.string();
            assert!(first.length().contains(first.int()));
            second.int();
        }
    }

    #[test]
    fn generator_with_rng() {
        let mut generator = Generator::new(rand::thread_rng(), Length::MIN);
        for _ in 0..100 {
            assert!(generator.int() < 64);
            assert_eq!(decode(generator.string()).map(|value| value < 64), Ok(true));
        }
    }
}
