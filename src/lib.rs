//! Fixed width identifiers: a `u64` written with 1 to 11 url-safe base64 characters.
//!
//! ```
//! assert_eq!(livid::encode(64, 5), Ok("AAABA".to_string()));
//! assert_eq!(livid::decode("AAABA"), Ok(64));
//! ```

pub mod alphabet;
pub mod codec;
pub mod configuration;
pub mod error;
pub mod id;
pub mod length;
pub mod random;

pub use self::{
    alphabet::Alphabet,
    codec::{decode, encode, encode_into, Decoder, Encoder, ALPHABET},
    configuration::Configuration,
    error::Error,
    id::Livid,
    length::Length,
    random::{random_int, random_int_with, random_str, random_str_with, Generator},
};
