//! Trend aggregation: entries within a rolling window, projected onto the
//! chart's x (date label) and y (mood value) axes.

use crate::constants;
use crate::journal::entry::{sorted_ascending, MoodEntry};
use crate::journal::mood::Mood;
use chrono::{Duration, Months, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

/// The rolling window of the trends view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendWindow {
    #[default]
    Week,
    Month,
    All,
}

impl TrendWindow {
    pub fn label(self) -> &'static str {
        match self {
            TrendWindow::Week => "Week",
            TrendWindow::Month => "Month",
            TrendWindow::All => "All Time",
        }
    }

    /// Earliest instant an entry may fall on to be kept, `None` for `All`.
    ///
    /// The weekly cutoff is exactly seven days before `now`. The monthly cutoff
    /// is midnight of the same day one calendar month earlier, clamped to the
    /// end of shorter months. Day overflow does not roll forward: on March 31
    /// the cutoff is February 29 (or 28), not March 2, so the last days of
    /// February stay in the window.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use moodlog::journal::TrendWindow;
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let cutoff = TrendWindow::Month.cutoff(now).unwrap();
    /// assert_eq!(cutoff.to_string(), "2024-02-29 00:00:00");
    /// ```
    pub fn cutoff(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TrendWindow::Week => Some(now - Duration::days(constants::TREND_WEEK_DAYS)),
            TrendWindow::Month => now
                .date()
                .checked_sub_months(Months::new(constants::TREND_MONTHS))
                .map(|date| date.and_time(NaiveTime::MIN)),
            TrendWindow::All => None,
        }
    }
}

impl fmt::Display for TrendWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrendWindow::Week => "week",
            TrendWindow::Month => "month",
            TrendWindow::All => "all",
        })
    }
}

impl FromStr for TrendWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(TrendWindow::Week),
            "month" => Ok(TrendWindow::Month),
            "all" => Ok(TrendWindow::All),
            other => Err(format!(
                "Unknown timeframe '{}'. Expected one of: week, month, all",
                other
            )),
        }
    }
}

/// One bar on the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// The entry's date string, used as the x-axis label.
    pub label: String,
    /// Mood value from 1 to 5.
    pub value: u8,
    /// Bar color as a hex string.
    pub color: &'static str,
    /// Tooltip title line.
    pub mood_label: &'static str,
    /// Tooltip detail: the note cut to 30 characters with `...` appended when longer.
    pub note_excerpt: Option<String>,
}

impl TrendPoint {
    fn from_entry(entry: &MoodEntry) -> Self {
        Self {
            label: entry.date.as_str().to_string(),
            value: entry.mood.trend_value(),
            color: entry.mood.color(),
            mood_label: entry.mood.label(),
            note_excerpt: note_excerpt(&entry.note),
        }
    }
}

fn note_excerpt(note: &str) -> Option<String> {
    if note.is_empty() {
        return None;
    }
    let mut excerpt: String = note.chars().take(constants::NOTE_EXCERPT_CHARS).collect();
    if note.chars().count() > constants::NOTE_EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    Some(excerpt)
}

/// Sorts entries oldest first, keeps those inside `window`, and projects them
/// to chart points.
///
/// Entries whose date cannot be parsed are kept only by `TrendWindow::All`,
/// where they lead the series.
pub fn aggregate(entries: &[MoodEntry], window: TrendWindow, now: NaiveDateTime) -> Vec<TrendPoint> {
    let cutoff = window.cutoff(now);

    sorted_ascending(entries)
        .into_iter()
        .filter(|entry| match cutoff {
            None => true,
            Some(cutoff) => entry.date.instant().is_some_and(|instant| instant >= cutoff),
        })
        .map(TrendPoint::from_entry)
        .collect()
}

/// Y-axis tick label for a chart value; empty for values without a mood.
pub fn axis_label(value: u8) -> &'static str {
    Mood::from_trend_value(value).map_or("", Mood::label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn entry(date: &str, mood: &str, note: &str) -> MoodEntry {
        MoodEntry::new(date.into(), mood, note, None)
    }

    #[test]
    fn test_week_excludes_entries_older_than_seven_days() {
        let now = at(2024, 1, 15, 12);
        let entries = vec![
            entry("1/15/2024", "happy", "today"),
            entry("1/7/2024", "sad", "eight days ago"),
            entry("1/9/2024", "angry", "six days ago"),
            entry("1/8/2024", "neutral", "seven days ago at midnight"),
        ];

        let labels: Vec<String> = aggregate(&entries, TrendWindow::Week, now)
            .into_iter()
            .map(|p| p.label)
            .collect();

        // 1/8 midnight is before the 12:00 cutoff on 1/8.
        assert_eq!(labels, vec!["1/9/2024", "1/15/2024"]);
    }

    #[test]
    fn test_week_cutoff_is_inclusive() {
        let now = at(2024, 1, 15, 0);
        let entries = vec![entry("1/8/2024", "happy", "exactly seven days")];
        assert_eq!(aggregate(&entries, TrendWindow::Week, now).len(), 1);
    }

    #[test]
    fn test_month_window_is_calendar_aware() {
        let now = at(2024, 3, 15, 18);
        let entries = vec![
            entry("2/14/2024", "sad", "too old"),
            entry("2/15/2024", "happy", "boundary"),
            entry("3/1/2024", "neutral", "inside"),
        ];

        let labels: Vec<String> = aggregate(&entries, TrendWindow::Month, now)
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, vec!["2/15/2024", "3/1/2024"]);
    }

    #[test]
    fn test_month_window_clamps_instead_of_rolling_over() {
        let now = at(2024, 3, 31, 9);
        let entries = vec![
            entry("2/28/2024", "sad", "outside"),
            entry("2/29/2024", "happy", "clamped boundary"),
            entry("3/1/2024", "neutral", "inside"),
        ];

        let labels: Vec<String> = aggregate(&entries, TrendWindow::Month, now)
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, vec!["2/29/2024", "3/1/2024"]);
    }

    #[test]
    fn test_all_keeps_everything_sorted() {
        let now = at(2024, 1, 15, 12);
        let entries = vec![
            entry("1/3/2023", "happy", "b"),
            entry("not a date", "sad", "x"),
            entry("1/2/2023", "angry", "a"),
            entry("1/20/2024", "very-happy", "future"),
        ];

        let points = aggregate(&entries, TrendWindow::All, now);
        assert_eq!(points.len(), entries.len());

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["not a date", "1/2/2023", "1/3/2023", "1/20/2024"]);
    }

    #[test]
    fn test_unparseable_dates_never_pass_a_cutoff() {
        let now = at(2024, 1, 15, 12);
        let entries = vec![entry("garbage", "happy", "x")];
        assert!(aggregate(&entries, TrendWindow::Week, now).is_empty());
        assert!(aggregate(&entries, TrendWindow::Month, now).is_empty());
    }

    #[test]
    fn test_points_carry_taxonomy_values() {
        let now = at(2024, 1, 15, 12);
        let entries = vec![
            entry("1/14/2024", "very-happy", "great"),
            entry("1/15/2024", "unlisted", "hmm"),
        ];

        let points = aggregate(&entries, TrendWindow::Week, now);
        assert_eq!(points[0].value, 5);
        assert_eq!(points[0].color, "#4ade80");
        assert_eq!(points[0].mood_label, "Very Happy");
        assert_eq!(points[1].value, 3);
        assert_eq!(points[1].color, "#60a5fa");
        assert_eq!(points[1].mood_label, "Unknown");
    }

    #[test]
    fn test_note_excerpt() {
        assert_eq!(note_excerpt(""), None);
        assert_eq!(note_excerpt("short").as_deref(), Some("short"));

        let exactly_thirty = "a".repeat(30);
        assert_eq!(note_excerpt(&exactly_thirty), Some(exactly_thirty.clone()));

        let long = format!("{}tail", "b".repeat(30));
        assert_eq!(note_excerpt(&long), Some(format!("{}...", "b".repeat(30))));
    }

    #[test]
    fn test_axis_labels() {
        let labels: Vec<&str> = (0..=6).map(axis_label).collect();
        assert_eq!(
            labels,
            vec!["", "Angry", "Sad", "Neutral", "Happy", "Very Happy", ""]
        );
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("week".parse::<TrendWindow>().unwrap(), TrendWindow::Week);
        assert_eq!("month".parse::<TrendWindow>().unwrap(), TrendWindow::Month);
        assert_eq!("all".parse::<TrendWindow>().unwrap(), TrendWindow::All);
        assert!("year".parse::<TrendWindow>().is_err());
        assert_eq!(TrendWindow::default(), TrendWindow::Week);
    }
}
