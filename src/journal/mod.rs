//! The journal model: moods, entries, their storage, and the pure views over
//! them (mood filter and trend aggregation).
//!
//! Nothing in here renders output or performs network I/O.

pub mod entry;
pub mod filter;
pub mod mood;
pub mod store;
pub mod trends;

pub use entry::{sorted_ascending, sorted_descending, EntryDate, MoodEntry, WeatherSnapshot};
pub use filter::{filter_entries, MoodFilter};
pub use mood::{Mood, MoodKey};
pub use store::EntryStore;
pub use trends::{aggregate, axis_label, TrendPoint, TrendWindow};
