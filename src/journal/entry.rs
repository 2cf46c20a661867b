//! The persisted journal entry.
//!
//! The JSON shape is fixed by existing data:
//!
//! ```json
//! {"date":"1/15/2024","mood":"happy","note":"...","weather":{"temp":21.4,"description":"clear sky","icon":"https://..."}}
//! ```
//!
//! `weather` is `null` when no snapshot was taken.

use crate::constants;
use crate::journal::mood::MoodKey;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The weather recorded alongside an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Celsius.
    pub temp: f64,
    pub description: String,
    /// URL of the condition icon.
    pub icon: String,
}

impl WeatherSnapshot {
    /// Temperature rounded half-up to whole degrees (`-2.5` rounds to `-2`).
    pub fn rounded_temp(&self) -> i64 {
        round_half_up(self.temp)
    }
}

pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// The display date of an entry.
///
/// Stored verbatim as the user saw it. Parsing is only used for ordering and
/// window checks; see [`EntryDate::parse`] for the accepted forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Stamps a calendar date in the `M/D/YYYY` form used for new entries.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use moodlog::journal::EntryDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    /// assert_eq!(EntryDate::from_date(date).as_str(), "1/5/2024");
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(constants::ENTRY_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the stored string into a calendar date.
    ///
    /// Accepted forms, tried in order:
    /// - month-first `M/D/YYYY` (`1/2/2024` is January 2nd)
    /// - ISO `YYYY-MM-DD`
    /// - RFC 3339 timestamps, using their date part
    ///
    /// Returns `None` for anything else.
    pub fn parse(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        NaiveDate::parse_from_str(raw, constants::DATE_FORMAT_US)
            .or_else(|_| NaiveDate::parse_from_str(raw, constants::DATE_FORMAT_ISO))
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
    }

    /// The parsed date at local midnight, the instant used for window cutoffs.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.parse().map(|date| date.and_time(NaiveTime::MIN))
    }

    /// Chronological ordering. Unparseable dates order before every parseable
    /// one and compare equal to each other, so stable sorts keep their
    /// insertion order.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self.parse(), other.parse()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One journal record. Entries are immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: EntryDate,
    pub mood: MoodKey,
    pub note: String,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
}

impl MoodEntry {
    pub fn new(
        date: EntryDate,
        mood: impl Into<MoodKey>,
        note: impl Into<String>,
        weather: Option<WeatherSnapshot>,
    ) -> Self {
        Self {
            date,
            mood: mood.into(),
            note: note.into(),
            weather,
        }
    }
}

/// Returns references to `entries` sorted oldest first.
pub fn sorted_ascending(entries: &[MoodEntry]) -> Vec<&MoodEntry> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.chronological_cmp(&b.date));
    sorted
}

/// Returns references to `entries` sorted newest first. Unparseable dates go last.
pub fn sorted_descending(entries: &[MoodEntry]) -> Vec<&MoodEntry> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.chronological_cmp(&a.date));
    sorted
}
