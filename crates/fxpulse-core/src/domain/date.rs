use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, PrimitiveDateTime, Time};

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_LABEL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Calendar date of an announcement, `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(Date);

impl EventDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = Date::parse(input, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
            value: input.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    pub const fn from_calendar(date: Date) -> Self {
        Self(date)
    }

    /// The date `days` earlier, saturating at the calendar minimum.
    pub fn minus_days(self, days: u16) -> Self {
        match self.0.checked_sub(Duration::days(i64::from(days))) {
            Some(date) => Self(date),
            None => Self(Date::MIN),
        }
    }

    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("EventDate must be ISO formattable")
    }

    /// Short human label, e.g. `Jan 5, 2024`.
    pub fn display_label(self) -> String {
        self.0
            .format(DATE_LABEL_FORMAT)
            .expect("EventDate must be label formattable")
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for EventDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Wall-clock time of an announcement, `HH:MM` 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTime(Time);

impl EventTime {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = Time::parse(input, TIME_FORMAT).map_err(|_| ValidationError::InvalidTime {
            value: input.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
            })
    }

    pub const fn into_inner(self) -> Time {
        self.0
    }

    pub fn format_hm(self) -> String {
        self.0
            .format(TIME_FORMAT)
            .expect("EventTime must be HH:MM formattable")
    }
}

impl Display for EventTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_hm())
    }
}

impl Serialize for EventTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_hm())
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Naive announcement timestamp, `YYYY-MM-DDTHH:MM:SS` with no zone.
///
/// Built by joining an event's date and time verbatim; never adjusted
/// across timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTimestamp(PrimitiveDateTime);

impl EventTimestamp {
    pub const fn combine(date: EventDate, time: EventTime) -> Self {
        Self(PrimitiveDateTime::new(date.0, time.0))
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = PrimitiveDateTime::parse(input, TIMESTAMP_FORMAT).map_err(|_| {
            ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            }
        })?;
        Ok(Self(parsed))
    }

    pub const fn date(self) -> EventDate {
        EventDate(self.0.date())
    }

    pub const fn time(self) -> EventTime {
        EventTime(self.0.time())
    }

    pub const fn into_inner(self) -> PrimitiveDateTime {
        self.0
    }

    pub fn format_naive(self) -> String {
        self.0
            .format(TIMESTAMP_FORMAT)
            .expect("EventTimestamp must be naive formattable")
    }
}

impl Display for EventTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_naive())
    }
}

impl Serialize for EventTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_naive())
    }
}

impl<'de> Deserialize<'de> for EventTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
