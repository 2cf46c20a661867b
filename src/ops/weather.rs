//! The weather widget.

use crate::constants;
use crate::ops::theme::theme_header;
use crate::theme::WeatherTheme;
use crate::weather::{WeatherReport, WeatherStatus};
use chrono::{DateTime, Local};
use std::fmt::Write;

const TITLE: &str = "Current Weather";

fn clock(time: Option<DateTime<Local>>) -> String {
    time.map_or_else(
        || "-".to_string(),
        |time| time.format(constants::CLOCK_TIME_FORMAT).to_string(),
    )
}

fn render_report(out: &mut String, report: &WeatherReport) {
    match &report.country {
        Some(country) => {
            let _ = writeln!(out, "{}, {}", report.city, country);
        }
        None => {
            let _ = writeln!(out, "{}", report.city);
        }
    }
    let _ = writeln!(
        out,
        "{}°C  {}",
        report.snapshot().rounded_temp(),
        report.description
    );
    if let Some(humidity) = report.humidity {
        let _ = writeln!(out, "Humidity: {}%", humidity);
    }
    if let Some(wind_speed) = report.wind_speed {
        let _ = writeln!(out, "Wind: {} m/s", wind_speed);
    }
    let _ = writeln!(
        out,
        "Sunrise: {}  Sunset: {}",
        clock(report.sunrise),
        clock(report.sunset)
    );
}

/// Renders the widget for the current status.
pub fn render_weather(status: &WeatherStatus, theme: WeatherTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", theme_header(TITLE, theme));

    match status {
        WeatherStatus::Loading => {
            let _ = writeln!(out, "Loading weather...");
        }
        WeatherStatus::Failed(reason) => {
            let _ = writeln!(out, "{}", reason);
        }
        WeatherStatus::Ready(report) => render_report(&mut out, report),
    }

    let _ = writeln!(out, "Theme: {}", theme.label());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report() -> WeatherReport {
        WeatherReport {
            temp: 12.6,
            description: "light rain".to_string(),
            icon: "https://openweathermap.org/img/wn/10d@2x.png".to_string(),
            main: "Rain".to_string(),
            humidity: Some(81),
            wind_speed: Some(4.1),
            city: "Bergen".to_string(),
            country: Some("NO".to_string()),
            sunrise: Local.with_ymd_and_hms(2024, 5, 1, 5, 7, 9).single(),
            sunset: None,
        }
    }

    #[test]
    fn test_loading_state() {
        let out = render_weather(&WeatherStatus::Loading, WeatherTheme::Default);
        assert_eq!(out, "Current Weather\nLoading weather...\nTheme: Default\n");
    }

    #[test]
    fn test_failed_state_shows_reason() {
        let status = WeatherStatus::Failed("Location permission denied".to_string());
        let out = render_weather(&status, WeatherTheme::Default);
        assert!(out.contains("Location permission denied\n"));
    }

    #[test]
    fn test_ready_state() {
        let out = render_weather(&WeatherStatus::Ready(report()), WeatherTheme::Rain);

        assert!(out.starts_with("Current Weather 🌧️\n"));
        assert!(out.contains("Bergen, NO\n"));
        assert!(out.contains("13°C  light rain\n"));
        assert!(out.contains("Humidity: 81%\n"));
        assert!(out.contains("Wind: 4.1 m/s\n"));
        assert!(out.contains("Sunrise: 5:07:09 AM  Sunset: -\n"));
        assert!(out.ends_with("Theme: Rain\n"));
    }
}
