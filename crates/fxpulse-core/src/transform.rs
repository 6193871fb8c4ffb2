use crate::domain::{score_of, EventTimestamp, RawEvent, TransformedEvent, Weight};
use crate::parse::parse_value;

/// Scores one raw event at the given weight.
///
/// Parses the previous/forecast/actual strings (unparseable fields become
/// 0), derives the score once, and joins date and time into the naive
/// announcement timestamp. Pure and deterministic: the same event and
/// weight always produce the same record.
pub fn transform(raw: &RawEvent, weight: Weight) -> TransformedEvent {
    let previous = parse_value(&raw.previous);
    let forecast = parse_value(&raw.forecast);
    let actual = parse_value(&raw.actual);
    let score = score_of(actual, previous, forecast);

    TransformedEvent {
        id: raw.id.clone(),
        event_type: raw.title.clone(),
        currency: raw.currency,
        timestamp: EventTimestamp::combine(raw.date, raw.time),
        previous,
        forecast,
        actual,
        weight,
        score,
        weighted_score: score.weighted(weight),
    }
}

/// Replays an already-scored event at a new weight.
///
/// Only `weight` and `weighted_score` change; the score derived at
/// transformation is kept as is.
pub fn reweight(event: &TransformedEvent, weight: Weight) -> TransformedEvent {
    TransformedEvent {
        weight,
        weighted_score: event.score.weighted(weight),
        ..event.clone()
    }
}
