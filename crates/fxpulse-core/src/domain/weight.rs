use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// User-assigned importance multiplier for an event, 1 through 10.
///
/// The range is enforced here so downstream scoring never sees an
/// out-of-range multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(10);

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(ValidationError::WeightOutOfRange {
                value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}
