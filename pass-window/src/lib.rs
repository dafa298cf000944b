//! Countdown logic for an AOS/LOS pass window.
//!
//! Two operator-entered timestamps, each either being edited or locked, are
//! compared against a ticking clock to produce a label and a duration.

mod clock;
mod display;
mod field;
mod store;
mod timestamp;
mod tracker;

pub use clock::{Clock, FixedClock, SystemClock, Ticker, DEFAULT_TICK_INTERVAL};
pub use display::{derive_display, format_duration, DisplayLabel, DisplayState, DURATION_SENTINEL};
pub use field::{FieldKind, FieldMode, FieldView, TimestampField};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use timestamp::{to_canonical, ParsedTimestamp};
pub use tracker::TimeWindowTracker;
