//! Mood filtering for the history view.

use crate::journal::entry::MoodEntry;
use crate::journal::mood::{Mood, MoodKey};
use std::fmt;
use std::str::FromStr;

/// Filter selector: every entry, or a single mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    /// Every option in the order the history view lists them.
    pub fn options() -> Vec<MoodFilter> {
        std::iter::once(MoodFilter::All)
            .chain(Mood::ALL.into_iter().map(MoodFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodFilter::All => "All Entries",
            MoodFilter::Only(mood) => mood.label(),
        }
    }

    /// Whether an entry's mood passes this filter. Unknown moods only pass `All`.
    pub fn matches(self, mood: &MoodKey) -> bool {
        match self {
            MoodFilter::All => true,
            MoodFilter::Only(wanted) => mood.mood() == Some(wanted),
        }
    }
}

impl fmt::Display for MoodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodFilter::All => f.write_str("all"),
            MoodFilter::Only(mood) => write!(f, "{}", mood),
        }
    }
}

impl FromStr for MoodFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(MoodFilter::All);
        }
        s.parse::<Mood>()
            .map(MoodFilter::Only)
            .map_err(|e| format!("{} (or 'all')", e))
    }
}

/// Returns the entries that pass `filter`, in their original order.
///
/// ```
/// use moodlog::journal::{filter_entries, Mood, MoodEntry, MoodFilter};
///
/// let entries = vec![
///     MoodEntry::new("1/1/2024".into(), Mood::Happy, "a", None),
///     MoodEntry::new("1/2/2024".into(), Mood::Sad, "b", None),
/// ];
///
/// assert_eq!(filter_entries(&entries, MoodFilter::All), entries);
/// assert_eq!(filter_entries(&entries, MoodFilter::Only(Mood::Sad)).len(), 1);
/// ```
pub fn filter_entries(entries: &[MoodEntry], filter: MoodFilter) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(&entry.mood))
        .cloned()
        .collect()
}
