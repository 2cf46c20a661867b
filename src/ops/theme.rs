//! Theme header shared by every view, and the `theme` command.

use crate::state::AppState;
use crate::theme::WeatherTheme;

/// A view title followed by the theme icon, when the theme has one.
///
/// ```
/// use moodlog::ops::theme_header;
/// use moodlog::theme::WeatherTheme;
///
/// assert_eq!(theme_header("Your Mood History", WeatherTheme::Snow), "Your Mood History ❄️");
/// assert_eq!(theme_header("Your Mood History", WeatherTheme::Default), "Your Mood History");
/// ```
pub fn theme_header(title: &str, theme: WeatherTheme) -> String {
    match theme.icon() {
        Some(icon) => format!("{} {}", title, icon),
        None => title.to_string(),
    }
}

/// Resolves `description`, or the live weather description when none is
/// given, and renders the result.
pub fn describe_theme(description: Option<&str>, state: &AppState) -> String {
    let theme = match description {
        Some(description) => WeatherTheme::resolve(Some(description)),
        None => state.theme(),
    };

    let mut out = format!("theme: {}", theme.id());
    if let Some(icon) = theme.icon() {
        out.push(' ');
        out.push_str(icon);
    }
    out.push('\n');
    out
}
