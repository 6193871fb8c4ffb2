use thiserror::Error;

use crate::aggregate::{aggregate_by_date, cumulative_by_date, ChartDataPoint, MetricField};
use crate::domain::{Currency, EventDate, RawEvent, TransformedEvent, Weight};
use crate::feed::{EventFeed, FeedError};
use crate::filters::{EventFilters, WindowPreset};
use crate::query::{filter_sort_search, SortConfig};
use crate::transform::{reweight, transform};
use crate::ValidationError;

/// Failures raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Filter(#[from] ValidationError),
}

/// Owns the active filters and the current scored-event collection.
///
/// Filter changes replace the whole collection from the injected feed;
/// weight changes rewrite the matching record in place. Weights reset to
/// the default on the next refresh.
pub struct EventSession {
    feed: Box<dyn EventFeed>,
    filters: EventFilters,
    raw_events: Vec<RawEvent>,
    events: Vec<TransformedEvent>,
}

impl EventSession {
    /// A session starts empty; call [`refresh`](Self::refresh) to load the
    /// filtered range.
    pub fn new(feed: Box<dyn EventFeed>, filters: EventFilters) -> Self {
        Self {
            feed,
            filters,
            raw_events: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Pulls the filtered date range from the feed and replaces both
    /// collections.
    ///
    /// Events outside the currency selection are dropped; the remainder is
    /// scored at the default weight. Returns the new collection size.
    pub fn refresh(&mut self) -> Result<usize, SessionError> {
        let fetched = self
            .feed
            .events_between(self.filters.start_date(), self.filters.end_date())?;

        let raw_events: Vec<RawEvent> = fetched
            .into_iter()
            .filter(|event| self.filters.currencies().contains(event.currency))
            .collect();
        let events = raw_events
            .iter()
            .map(|event| transform(event, Weight::default()))
            .collect();

        self.raw_events = raw_events;
        self.events = events;
        Ok(self.events.len())
    }

    /// Replaces the active filters and refreshes.
    pub fn set_filters(&mut self, filters: EventFilters) -> Result<usize, SessionError> {
        self.filters = filters;
        self.refresh()
    }

    /// Replaces the date range and refreshes. A reversed range is rejected
    /// before anything changes.
    pub fn set_date_range(
        &mut self,
        start_date: EventDate,
        end_date: EventDate,
    ) -> Result<usize, SessionError> {
        self.filters.set_date_range(start_date, end_date)?;
        self.refresh()
    }

    /// Moves the range to a preset trailing window ending at `end` and
    /// refreshes. The currency selection is kept.
    pub fn set_window(
        &mut self,
        end: EventDate,
        preset: WindowPreset,
    ) -> Result<usize, SessionError> {
        self.set_date_range(end.minus_days(preset.days()), end)
    }

    /// Toggles one currency and refreshes. Deselecting the final currency
    /// is rejected before anything changes.
    pub fn toggle_currency(&mut self, currency: Currency) -> Result<usize, SessionError> {
        self.filters.toggle_currency(currency)?;
        self.refresh()
    }

    /// Re-weights the matching event, leaving its score untouched.
    /// Returns false when no loaded event has the id.
    pub fn set_weight(&mut self, event_id: &str, weight: Weight) -> bool {
        match self.events.iter_mut().find(|event| event.id == event_id) {
            Some(slot) => {
                let updated = reweight(slot, weight);
                *slot = updated;
                true
            }
            None => false,
        }
    }

    pub fn events(&self) -> &[TransformedEvent] {
        &self.events
    }

    pub fn raw_events(&self) -> &[RawEvent] {
        &self.raw_events
    }

    pub fn filters(&self) -> &EventFilters {
        &self.filters
    }

    /// Per-day weighted-score series over the loaded collection.
    pub fn chart_data(&self) -> Vec<ChartDataPoint> {
        aggregate_by_date(&self.events, MetricField::WeightedScore)
    }

    /// Running per-currency weighted-score totals over the loaded
    /// collection.
    pub fn cumulative_chart_data(&self) -> Vec<ChartDataPoint> {
        cumulative_by_date(&self.events, self.filters.currencies())
    }

    /// Table rows for the loaded collection under a search term and sort.
    pub fn table_rows(&self, search_term: &str, sort: SortConfig) -> Vec<TransformedEvent> {
        filter_sort_search(&self.events, &self.filters, search_term, sort)
    }
}
