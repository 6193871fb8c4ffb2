use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Currency, EventDate};
use crate::ValidationError;

/// Trailing-window presets offered for the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowPreset {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
}

impl WindowPreset {
    pub const ALL: [Self; 3] = [Self::SevenDays, Self::ThirtyDays, Self::NinetyDays];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::NinetyDays => "90d",
        }
    }

    pub const fn days(self) -> u16 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
        }
    }
}

impl Default for WindowPreset {
    fn default() -> Self {
        Self::ThirtyDays
    }
}

impl Display for WindowPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowPreset {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            "90d" => Ok(Self::NinetyDays),
            other => Err(ValidationError::InvalidWindowPreset {
                value: other.to_owned(),
            }),
        }
    }
}

/// Non-empty subset of the tracked currencies.
///
/// Emptiness is unrepresentable: construction from an empty list fails and
/// toggling off the final member is rejected, leaving the selection as it
/// was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Currency>", into = "Vec<Currency>")]
pub struct CurrencySelection(BTreeSet<Currency>);

impl CurrencySelection {
    /// All tracked currencies.
    pub fn all() -> Self {
        Self(Currency::ALL.into_iter().collect())
    }

    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Result<Self, ValidationError> {
        let selected: BTreeSet<Currency> = currencies.into_iter().collect();
        if selected.is_empty() {
            return Err(ValidationError::EmptyCurrencySelection);
        }
        Ok(Self(selected))
    }

    pub fn only(currency: Currency) -> Self {
        Self(BTreeSet::from([currency]))
    }

    pub fn contains(&self, currency: Currency) -> bool {
        self.0.contains(&currency)
    }

    /// Adds the currency if absent, removes it if present.
    ///
    /// Removing the final member is rejected and the selection is kept.
    pub fn toggle(&mut self, currency: Currency) -> Result<(), ValidationError> {
        if self.0.contains(&currency) {
            if self.0.len() == 1 {
                return Err(ValidationError::EmptyCurrencySelection);
            }
            self.0.remove(&currency);
        } else {
            self.0.insert(currency);
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Currency> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for CurrencySelection {
    fn default() -> Self {
        Self::all()
    }
}

impl TryFrom<Vec<Currency>> for CurrencySelection {
    type Error = ValidationError;

    fn try_from(currencies: Vec<Currency>) -> Result<Self, Self::Error> {
        Self::new(currencies)
    }
}

impl From<CurrencySelection> for Vec<Currency> {
    fn from(selection: CurrencySelection) -> Self {
        selection.0.into_iter().collect()
    }
}

/// Active query over stored events: an inclusive date range plus the
/// currency selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFilters {
    start_date: EventDate,
    end_date: EventDate,
    currencies: CurrencySelection,
}

impl EventFilters {
    pub fn new(
        start_date: EventDate,
        end_date: EventDate,
        currencies: CurrencySelection,
    ) -> Result<Self, ValidationError> {
        if start_date > end_date {
            return Err(ValidationError::InvalidDateRange {
                start: start_date.format_iso(),
                end: end_date.format_iso(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
            currencies,
        })
    }

    /// Trailing window ending at `end`, e.g. the last 30 days, over all
    /// currencies.
    pub fn trailing_days(end: EventDate, days: u16) -> Self {
        Self {
            start_date: end.minus_days(days),
            end_date: end,
            currencies: CurrencySelection::all(),
        }
    }

    /// Preset trailing window ending at `end`.
    pub fn preset(end: EventDate, preset: WindowPreset) -> Self {
        Self::trailing_days(end, preset.days())
    }

    pub fn with_currencies(mut self, currencies: CurrencySelection) -> Self {
        self.currencies = currencies;
        self
    }

    pub const fn start_date(&self) -> EventDate {
        self.start_date
    }

    pub const fn end_date(&self) -> EventDate {
        self.end_date
    }

    pub const fn currencies(&self) -> &CurrencySelection {
        &self.currencies
    }

    /// Replaces the date range; a reversed range is rejected and the
    /// previous range is kept.
    pub fn set_date_range(
        &mut self,
        start_date: EventDate,
        end_date: EventDate,
    ) -> Result<(), ValidationError> {
        if start_date > end_date {
            return Err(ValidationError::InvalidDateRange {
                start: start_date.format_iso(),
                end: end_date.format_iso(),
            });
        }
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    pub fn toggle_currency(&mut self, currency: Currency) -> Result<(), ValidationError> {
        self.currencies.toggle(currency)
    }
}
