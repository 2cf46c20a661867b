//! The history (calendar) view: one card per entry, narrowed by a mood filter.

use crate::journal::{filter_entries, MoodEntry, MoodFilter};
use crate::ops::theme::theme_header;
use crate::theme::WeatherTheme;
use std::fmt::Write;

const TITLE: &str = "Your Mood History";
const EMPTY_MESSAGE: &str = "No entries found. Start tracking your mood!";
const EMPTY_FILTERED_MESSAGE: &str = "No entries found with this mood.";

fn filter_bar(active: MoodFilter) -> String {
    MoodFilter::options()
        .into_iter()
        .map(|option| {
            let label = match option {
                MoodFilter::All => option.label().to_string(),
                MoodFilter::Only(mood) => format!("{} {}", mood.icon(), mood.label()),
            };
            if option == active {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_card(out: &mut String, entry: &MoodEntry) {
    let icon = entry.mood.icon();
    if icon.is_empty() {
        let _ = writeln!(out, "{}", entry.date);
    } else {
        let _ = writeln!(out, "{}  {}", entry.date, icon);
    }

    if let Some(weather) = &entry.weather {
        let _ = writeln!(
            out,
            "  {}°C {}",
            weather.rounded_temp(),
            weather.description
        );
    }
    if !entry.note.is_empty() {
        let _ = writeln!(out, "  {}", entry.note);
    }
}

/// Renders the history view for `entries` in storage order.
pub fn render_history(entries: &[MoodEntry], filter: MoodFilter, theme: WeatherTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", theme_header(TITLE, theme));
    let _ = writeln!(out, "Filter by mood: {}", filter_bar(filter));
    out.push('\n');

    let visible = filter_entries(entries, filter);
    if visible.is_empty() {
        match filter {
            MoodFilter::All => {
                let _ = writeln!(out, "{}", EMPTY_MESSAGE);
            }
            MoodFilter::Only(mood) => {
                let _ = writeln!(out, "{}", mood.icon());
                let _ = writeln!(out, "{}", EMPTY_FILTERED_MESSAGE);
            }
        }
        return out;
    }

    for (index, entry) in visible.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_card(&mut out, entry);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{Mood, WeatherSnapshot};

    fn entries() -> Vec<MoodEntry> {
        vec![
            MoodEntry::new(
                "1/1/2024".into(),
                Mood::Happy,
                "New year",
                Some(WeatherSnapshot {
                    temp: -0.4,
                    description: "light snow".to_string(),
                    icon: String::new(),
                }),
            ),
            MoodEntry::new("1/2/2024".into(), Mood::Sad, "Back to work", None),
            MoodEntry::new("1/3/2024".into(), "pensive", "", None),
        ]
    }

    #[test]
    fn test_all_entries_in_storage_order() {
        let out = render_history(&entries(), MoodFilter::All, WeatherTheme::Default);

        assert!(out.starts_with("Your Mood History\n"));
        assert!(out.contains("[All Entries]"));
        let first = out.find("1/1/2024  🙂").unwrap();
        let second = out.find("1/2/2024  😞").unwrap();
        assert!(first < second);
        assert!(out.contains("  0°C light snow\n"));
        assert!(out.contains("  Back to work\n"));
        assert!(out.contains("1/3/2024\n"));
    }

    #[test]
    fn test_filter_narrows_cards() {
        let out = render_history(&entries(), MoodFilter::Only(Mood::Sad), WeatherTheme::Rain);

        assert!(out.starts_with("Your Mood History 🌧️\n"));
        assert!(out.contains("[😞 Sad]"));
        assert!(out.contains("Back to work"));
        assert!(!out.contains("New year"));
        assert!(!out.contains("1/3/2024"));
    }

    #[test]
    fn test_empty_filtered_result() {
        let out = render_history(&entries(), MoodFilter::Only(Mood::Angry), WeatherTheme::Default);
        assert!(out.contains("😡\nNo entries found with this mood.\n"));
    }

    #[test]
    fn test_empty_journal() {
        let out = render_history(&[], MoodFilter::All, WeatherTheme::Default);
        assert!(out.contains("No entries found. Start tracking your mood!"));
    }
}
