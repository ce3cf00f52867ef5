pub mod decode;
pub mod encode;
pub use crate::alphabet::Alphabet;

/// The url-safe base64 digits, `A` being 0 and `_` being 63.
pub const ALPHABET: Alphabet<64> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, Decoder};
pub use encode::{encode, encode_into, Encoder};
