use serde::{Deserialize, Serialize};

use super::{Currency, EventDate, EventTime, EventTimestamp, Impact, Score, Weight};

/// One announced indicator instance as delivered by a calendar feed.
///
/// `previous`, `forecast` and `actual` stay strings here: feeds decorate
/// them with units (`"3.2%"`) or leave them empty, and parsing is the
/// transformer's job. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub country: String,
    pub currency: Currency,
    pub title: String,
    pub date: EventDate,
    pub time: EventTime,
    pub impact: Impact,
    pub previous: String,
    pub forecast: String,
    pub actual: String,
}

/// A raw event enriched with parsed values and scoring analytics.
///
/// Invariant: `weighted_score == score.value() * weight.get()`. The score
/// is fixed at transformation; re-weighting replaces only `weight` and
/// `weighted_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedEvent {
    pub id: String,
    pub event_type: String,
    pub currency: Currency,
    pub timestamp: EventTimestamp,
    pub previous: f64,
    pub forecast: f64,
    pub actual: f64,
    pub weight: Weight,
    pub score: Score,
    pub weighted_score: i16,
}
