use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Currency, EventDate, TransformedEvent};
use crate::filters::CurrencySelection;

/// Numeric field of a scored event selectable for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricField {
    Previous,
    Forecast,
    Actual,
    Weight,
    Score,
    WeightedScore,
}

impl MetricField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Forecast => "forecast",
            Self::Actual => "actual",
            Self::Weight => "weight",
            Self::Score => "score",
            Self::WeightedScore => "weightedScore",
        }
    }

    pub fn value_of(self, event: &TransformedEvent) -> f64 {
        match self {
            Self::Previous => event.previous,
            Self::Forecast => event.forecast,
            Self::Actual => event.actual,
            Self::Weight => f64::from(event.weight.get()),
            Self::Score => f64::from(event.score.value()),
            Self::WeightedScore => f64::from(event.weighted_score),
        }
    }
}

/// One time-series row: a date plus a value per currency active that day.
///
/// Currencies without an event that day carry no entry at all, which is
/// distinct from an entry of 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub date: EventDate,
    #[serde(flatten)]
    pub values: BTreeMap<Currency, f64>,
}

impl ChartDataPoint {
    pub fn value(&self, currency: Currency) -> Option<f64> {
        self.values.get(&currency).copied()
    }
}

/// Sums the selected field per date and currency.
///
/// Returns one point per distinct announcement date, ascending.
pub fn aggregate_by_date(events: &[TransformedEvent], field: MetricField) -> Vec<ChartDataPoint> {
    let mut buckets: BTreeMap<EventDate, BTreeMap<Currency, f64>> = BTreeMap::new();

    for event in events {
        let slot = buckets
            .entry(event.timestamp.date())
            .or_default()
            .entry(event.currency)
            .or_insert(0.0);
        *slot += field.value_of(event);
    }

    into_points(buckets)
}

/// Running weighted-score total per selected currency, snapshotted at day
/// granularity.
///
/// Events are replayed in timestamp order regardless of input order; each
/// event advances its currency's accumulator (seeded at 0) and the point
/// for that date records the accumulator as of the day's last event, not
/// the per-event delta. Currencies outside the selection are ignored.
pub fn cumulative_by_date(
    events: &[TransformedEvent],
    currencies: &CurrencySelection,
) -> Vec<ChartDataPoint> {
    let mut ordered: Vec<&TransformedEvent> = events
        .iter()
        .filter(|event| currencies.contains(event.currency))
        .collect();
    ordered.sort_by_key(|event| event.timestamp);

    let mut totals: BTreeMap<Currency, f64> = BTreeMap::new();
    let mut buckets: BTreeMap<EventDate, BTreeMap<Currency, f64>> = BTreeMap::new();

    for event in ordered {
        let total = totals.entry(event.currency).or_insert(0.0);
        *total += f64::from(event.weighted_score);
        buckets
            .entry(event.timestamp.date())
            .or_default()
            .insert(event.currency, *total);
    }

    into_points(buckets)
}

fn into_points(buckets: BTreeMap<EventDate, BTreeMap<Currency, f64>>) -> Vec<ChartDataPoint> {
    buckets
        .into_iter()
        .map(|(date, values)| ChartDataPoint { date, values })
        .collect()
}
