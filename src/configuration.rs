use crate::Length;
use std::{env, error, fmt};

#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

/// Settings of a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Configuration {
    length: Length,
    seed: Option<u64>,
}

fn var_map<T, E: fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|err| Error::new(format!("Invalid {} {} ({})", key, value, err))),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

impl Configuration {
    pub const fn new(length: Length, seed: Option<u64>) -> Self {
        Self { length, seed }
    }

    /// Reads `LIVID_LENGTH` (defaults to 11) and `LIVID_SEED` (unset means seeded from entropy).
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let length = var_map(
            &lookup,
            "LIVID_LENGTH",
            |length| {
                let length = length.parse::<usize>().map_err(|err| err.to_string())?;
                Length::new(length).map_err(|err| err.to_string())
            },
            Some(Length::MAX),
        )?;
        let seed = var_map(&lookup, "LIVID_SEED", |seed| seed.parse::<u64>().map(Some), Some(None))?;
        log::debug!("Loaded configuration (length {}, seed {:?})", length, seed);
        Ok(Self { length, seed })
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Length::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use crate::Length;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let configuration = Configuration::from_lookup(lookup(&[])).unwrap();
        assert_eq!(configuration, Configuration::default());
        assert_eq!(configuration.length(), Length::MAX);
        assert_eq!(configuration.seed(), None);
    }

    #[test]
    fn values() {
        let configuration = Configuration::from_lookup(lookup(&[("LIVID_LENGTH", "5"), ("LIVID_SEED", "42")])).unwrap();
        assert_eq!(configuration, Configuration::new(Length::new(5).unwrap(), Some(42)));
    }

    #[test]
    fn invalid() {
        let error = Configuration::from_lookup(lookup(&[("LIVID_LENGTH", "12")])).unwrap_err();
        assert_eq!(error.message(), "Invalid LIVID_LENGTH 12 (Invalid length 12 (expected 1 to 11))");

        let error = Configuration::from_lookup(lookup(&[("LIVID_SEED", "-1")])).unwrap_err();
        assert!(error.message().starts_with("Invalid LIVID_SEED -1"));
    }
}
