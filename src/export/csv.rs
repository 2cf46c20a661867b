//! CSV serialization of the journal.

use crate::constants;
use crate::errors::{AppResult, ExportError};
use crate::journal::MoodEntry;

/// Renders every entry as one CSV row, in storage order.
///
/// Columns are `Date,Mood,Note,Temperature,Weather`. Temperature is rounded
/// to whole degrees; entries without weather leave the last two columns empty.
///
/// # Errors
///
/// Returns `ExportError::NoEntries` for an empty journal.
///
/// ```
/// use moodlog::export::csv::to_csv;
/// use moodlog::journal::{Mood, MoodEntry};
///
/// let entries = vec![MoodEntry::new("1/1/2024".into(), Mood::Happy, "He said \"hi\"", None)];
/// let csv = to_csv(&entries).unwrap();
/// assert_eq!(csv, "Date,Mood,Note,Temperature,Weather\n1/1/2024,happy,\"He said \"\"hi\"\"\",,\n");
/// ```
pub fn to_csv(entries: &[MoodEntry]) -> AppResult<String> {
    if entries.is_empty() {
        return Err(ExportError::NoEntries.into());
    }

    let mut out = String::new();
    out.push_str(constants::CSV_HEADER);
    out.push('\n');

    for entry in entries {
        let (temp, description) = match &entry.weather {
            Some(weather) => (
                weather.rounded_temp().to_string(),
                csv_escape(&weather.description),
            ),
            None => (String::new(), String::new()),
        };

        let row = [
            csv_escape(entry.date.as_str()),
            csv_escape(entry.mood.as_str()),
            csv_escape(&entry.note),
            temp,
            description,
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    Ok(out)
}

fn csv_escape(s: &str) -> String {
    let needs_quote = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');
    if !needs_quote {
        return s.to_string();
    }
    format!("\"{}\"", s.replace('"', "\"\""))
}
