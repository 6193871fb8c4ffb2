use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::TransformedEvent;
use crate::filters::EventFilters;

/// Sort order for table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sortable column of the event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Timestamp,
    Currency,
    EventType,
    Previous,
    Forecast,
    Actual,
    Weight,
    Score,
    WeightedScore,
}

/// Active sort: one key plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click state machine: selecting the active key flips the
    /// direction, selecting another key restarts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKey::Timestamp, SortDirection::Descending)
    }
}

/// Case-insensitive substring match against the event type or the currency
/// code. An empty term matches every event.
pub fn matches_search(event: &TransformedEvent, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    event.event_type.to_lowercase().contains(&needle)
        || event.currency.as_str().to_lowercase().contains(&needle)
}

/// Table pipeline: currency filter, then text search, then a stable
/// single-key sort.
///
/// Ties under the sort key keep their input order; there is no secondary
/// key.
pub fn filter_sort_search(
    events: &[TransformedEvent],
    filters: &EventFilters,
    search_term: &str,
    sort: SortConfig,
) -> Vec<TransformedEvent> {
    let mut rows: Vec<TransformedEvent> = events
        .iter()
        .filter(|event| filters.currencies().contains(event.currency))
        .filter(|event| matches_search(event, search_term))
        .cloned()
        .collect();

    rows.sort_by(|left, right| {
        let ordering = compare(sort.key, left, right);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    rows
}

fn compare(key: SortKey, left: &TransformedEvent, right: &TransformedEvent) -> Ordering {
    match key {
        SortKey::Id => left.id.cmp(&right.id),
        SortKey::Timestamp => left.timestamp.cmp(&right.timestamp),
        // Column sorts alphabetically by code, not by enum declaration.
        SortKey::Currency => left.currency.as_str().cmp(right.currency.as_str()),
        SortKey::EventType => left.event_type.cmp(&right.event_type),
        SortKey::Previous => left.previous.total_cmp(&right.previous),
        SortKey::Forecast => left.forecast.total_cmp(&right.forecast),
        SortKey::Actual => left.actual.total_cmp(&right.actual),
        SortKey::Weight => left.weight.cmp(&right.weight),
        SortKey::Score => left.score.value().cmp(&right.score.value()),
        SortKey::WeightedScore => left.weighted_score.cmp(&right.weighted_score),
    }
}
