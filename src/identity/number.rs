use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::IdentityError;
use super::validate::{clean, validate};

/// An identity number that has passed every checksum rule.
///
/// Holds only the 11 cleaned digits. `Display` prints the grouped form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Clean and validate `raw`, returning the first rule violation as an error.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let result = validate(raw);
        match result.rule() {
            None => Ok(Self(clean(raw))),
            Some(rule) => Err(IdentityError { rule }),
        }
    }

    /// The 11 digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `XXX XXX XX XXX`.
    pub fn formatted(&self) -> String {
        super::format(&self.0)
    }

    /// First three and last two digits, middle redacted.
    pub fn masked(&self) -> String {
        super::mask(&self.0)
    }
}

impl FromStr for IdentityNumber {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
