//! Event scoring and aggregation engine for economic calendar data.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Raw event scoring, weighting and re-weighting
//! - Per-date and cumulative time-series aggregation
//! - Table filtering, searching and sorting
//! - Feed/store collaborator traits with in-memory implementations

pub mod aggregate;
pub mod domain;
pub mod error;
pub mod feed;
pub mod filters;
pub mod parse;
pub mod query;
pub mod session;
pub mod store;
pub mod transform;

pub use aggregate::{aggregate_by_date, cumulative_by_date, ChartDataPoint, MetricField};
pub use domain::{
    score_of, Currency, EventDate, EventTime, EventTimestamp, Impact, RawEvent, Score,
    TransformedEvent, Weight,
};
pub use error::ValidationError;
pub use feed::{decode_events, EventFeed, FeedError, MockFeed};
pub use filters::{CurrencySelection, EventFilters, WindowPreset};
pub use parse::{parse_value, try_parse_value};
pub use query::{filter_sort_search, matches_search, SortConfig, SortDirection, SortKey};
pub use session::{EventSession, SessionError};
pub use store::{EventStore, MemoryStore, StoreError, StoredEventFeed};
pub use transform::{reweight, transform};
