use thiserror::Error;

use crate::domain::{Currency, EventDate, EventTime, Impact, RawEvent};
use crate::store::StoreError;

/// Failures raised by an event feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),
    #[error("feed payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ingestion boundary: yields raw events for an inclusive date range.
///
/// Implementations decide where events come from (a remote calendar, a
/// store, synthesis); the engine only consumes the resulting records. An
/// empty result is a legitimate outcome, not an error.
pub trait EventFeed: Send + Sync {
    fn events_between(&self, start: EventDate, end: EventDate)
        -> Result<Vec<RawEvent>, FeedError>;
}

/// Decodes the JSON array shape calendar feeds deliver.
pub fn decode_events(payload: &str) -> Result<Vec<RawEvent>, FeedError> {
    let events = serde_json::from_str(payload)?;
    Ok(events)
}

const EVENT_TYPES: [&str; 5] = [
    "CPI",
    "GDP",
    "Unemployment Rate",
    "Retail Sales",
    "Interest Rate Decision",
];

// Draw channels for the per-day/per-slot mixer.
const CH_COUNT: u64 = 0;
const CH_CURRENCY: u64 = 1;
const CH_TYPE: u64 = 2;
const CH_IMPACT: u64 = 3;
const CH_BASE: u64 = 4;
const CH_FORECAST: u64 = 5;
const CH_ACTUAL: u64 = 6;
const CH_HOUR: u64 = 7;
const CH_MINUTE: u64 = 8;

/// Seeded synthetic calendar: one to three events per day, cycling
/// currencies, indicators and impacts. The same seed always yields the
/// same calendar, so tests and demos are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct MockFeed {
    seed: u64,
}

impl MockFeed {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn draw(&self, day: EventDate, slot: u64, channel: u64) -> u64 {
        let lane = (day.into_inner().to_julian_day() as u64) << 16 | slot << 8 | channel;
        let mut mixed = self.seed ^ lane.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        mixed ^ (mixed >> 31)
    }

    fn synthesize(&self, day: EventDate, slot: u64) -> RawEvent {
        let currency = Currency::ALL[(self.draw(day, slot, CH_CURRENCY) % 5) as usize];
        let title = EVENT_TYPES[(self.draw(day, slot, CH_TYPE) % 5) as usize];
        let impact = Impact::ALL[(self.draw(day, slot, CH_IMPACT) % 3) as usize];

        let base = (self.draw(day, slot, CH_BASE) % 50) as f64 / 10.0;
        let forecast = base + ((self.draw(day, slot, CH_FORECAST) % 5) as f64 - 2.0) / 10.0;
        let actual = base + ((self.draw(day, slot, CH_ACTUAL) % 7) as f64 - 3.0) / 10.0;

        let hour = 8 + (self.draw(day, slot, CH_HOUR) % 9) as u8;
        let minute = [0u8, 15, 30, 45][(self.draw(day, slot, CH_MINUTE) % 4) as usize];
        let time = EventTime::from_hm(hour, minute).expect("mock times are in range");

        RawEvent {
            id: format!("mock-{}-{slot}", day.format_iso()),
            country: currency.country().to_owned(),
            currency,
            title: title.to_owned(),
            date: day,
            time,
            impact,
            previous: format!("{base:.1}"),
            forecast: format!("{forecast:.1}"),
            actual: format!("{actual:.1}"),
        }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new(0xFEED)
    }
}

impl EventFeed for MockFeed {
    fn events_between(
        &self,
        start: EventDate,
        end: EventDate,
    ) -> Result<Vec<RawEvent>, FeedError> {
        let mut events = Vec::new();
        let mut day = Some(start);

        while let Some(current) = day {
            if current > end {
                break;
            }

            let per_day = 1 + self.draw(current, 0, CH_COUNT) % 3;
            for slot in 0..per_day {
                events.push(self.synthesize(current, slot));
            }

            day = current.next_day();
        }

        Ok(events)
    }
}
