//! The trends view: a horizontal bar chart of mood values over a window.

use crate::journal::{aggregate, axis_label, Mood, MoodEntry, TrendPoint, TrendWindow};
use crate::ops::theme::theme_header;
use crate::theme::WeatherTheme;
use chrono::NaiveDateTime;
use std::fmt::Write;

const TITLE: &str = "Mood Trends";
const SUBTITLE: &str = "Visualizing your mood over time";
const NO_DATA_MESSAGE: &str = "No data available for the selected timeframe";
const BAR_UNIT: &str = "███";
const MAX_VALUE: u8 = 5;

fn window_bar(active: TrendWindow) -> String {
    [TrendWindow::Week, TrendWindow::Month, TrendWindow::All]
        .into_iter()
        .map(|window| {
            if window == active {
                format!("[{}]", window.label())
            } else {
                window.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_point(out: &mut String, point: &TrendPoint, label_width: usize) {
    let value = point.value.min(MAX_VALUE);
    let bar = BAR_UNIT.repeat(value as usize);
    let padding = " ".repeat(BAR_UNIT.chars().count() * (MAX_VALUE - value) as usize);

    let _ = write!(
        out,
        "{:>width$} | {}{} {}",
        point.label,
        bar,
        padding,
        point.mood_label,
        width = label_width
    );
    if let Some(excerpt) = &point.note_excerpt {
        let _ = write!(out, "  Note: {}", excerpt);
    }
    out.push('\n');
}

/// Renders the trends view.
///
/// Returns `None` when the journal is empty; the view is not shown at all in
/// that case.
pub fn render_trends(
    entries: &[MoodEntry],
    window: TrendWindow,
    now: NaiveDateTime,
    theme: WeatherTheme,
) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", theme_header(TITLE, theme));
    let _ = writeln!(out, "{}", SUBTITLE);
    let _ = writeln!(out, "Timeframe: {}", window_bar(window));
    out.push('\n');

    let points = aggregate(entries, window, now);
    if points.is_empty() {
        let _ = writeln!(out, "{}", NO_DATA_MESSAGE);
        return Some(out);
    }

    let label_width = points
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0);
    for point in &points {
        render_point(&mut out, point, label_width);
    }

    let scale = (1..=MAX_VALUE)
        .map(|value| format!("{} {}", value, axis_label(value)))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "\nScale: {}", scale);

    let legend = Mood::ALL
        .iter()
        .map(|mood| format!("{} {}", mood.icon(), mood.label()))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "Legend: {}", legend);

    Some(out)
}
