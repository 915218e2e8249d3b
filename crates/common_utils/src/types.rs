//! Types that can be used in other crates

use std::{fmt, str::FromStr};

use error_stack::report;
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, ParsingError};

/// An amount in the currency's minor unit (1 EUR = 100).
///
/// The gateway expects amounts as a plain run of decimal digits, without sign, separators or
/// currency symbols, which is exactly what [`fmt::Display`] renders.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnit(u64);

impl MinorUnit {
    /// Wrap an amount already expressed in minor units
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Amount in minor units
    pub fn get_amount_as_u64(self) -> u64 {
        self.0
    }

    /// Parse a string of plain decimal digits
    pub fn parse(value: &str) -> CustomResult<Self, ParsingError> {
        if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(report!(ParsingError::NotDecimalDigits {
                value: value.to_owned(),
            }));
        }

        value
            .parse::<u64>()
            .map(Self)
            .map_err(|_| report!(ParsingError::OutOfRange {
                value: value.to_owned(),
            }))
    }
}

impl From<u64> for MinorUnit {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for MinorUnit {
    type Err = error_stack::Report<ParsingError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
