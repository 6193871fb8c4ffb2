use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::Weight;

/// Discrete directional signal for one event: -2, -1, +1 or +2, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Score {
    MissedBoth,
    BeatForecastOnly,
    BeatPreviousOnly,
    BeatBoth,
}

impl Score {
    pub const fn value(self) -> i8 {
        match self {
            Self::MissedBoth => -2,
            Self::BeatForecastOnly => -1,
            Self::BeatPreviousOnly => 1,
            Self::BeatBoth => 2,
        }
    }

    /// Score scaled by the user-assigned weight.
    pub const fn weighted(self, weight: Weight) -> i16 {
        self.value() as i16 * weight.get() as i16
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<i8> for Score {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Self::MissedBoth),
            -1 => Ok(Self::BeatForecastOnly),
            1 => Ok(Self::BeatPreviousOnly),
            2 => Ok(Self::BeatBoth),
            other => Err(ValidationError::InvalidScoreValue { value: other }),
        }
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

/// Scores an announcement by comparing actual against previous and forecast.
///
/// Both comparisons are strict, so a tie on either axis counts against the
/// event; equal previous/forecast/actual scores -2. A single higher-is-better
/// rule is applied to every event type regardless of indicator semantics.
/// Total over all inputs, including NaN (which compares false on both axes).
pub fn score_of(actual: f64, previous: f64, forecast: f64) -> Score {
    let beat_previous = actual > previous;
    let beat_forecast = actual > forecast;

    match (beat_previous, beat_forecast) {
        (true, true) => Score::BeatBoth,
        (true, false) => Score::BeatPreviousOnly,
        (false, true) => Score::BeatForecastOnly,
        (false, false) => Score::MissedBoth,
    }
}
