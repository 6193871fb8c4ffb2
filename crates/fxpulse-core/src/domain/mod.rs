mod currency;
mod date;
mod event;
mod impact;
mod score;
mod weight;

pub use currency::Currency;
pub use date::{EventDate, EventTime, EventTimestamp};
pub use event::{RawEvent, TransformedEvent};
pub use impact::Impact;
pub use score::{score_of, Score};
pub use weight::Weight;
