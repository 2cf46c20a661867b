//! Weather themes.
//!
//! Every view derives its theme from the current weather description through
//! [`WeatherTheme::resolve`], so views shown side by side always agree.

use std::fmt;

/// Visual theme derived from the weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherTheme {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
    #[default]
    Default,
}

/// Keywords checked in order; the first one found in the description wins.
const KEYWORDS: &[(&str, WeatherTheme)] = &[
    ("clear", WeatherTheme::Clear),
    ("cloud", WeatherTheme::Clouds),
    ("rain", WeatherTheme::Rain),
    ("snow", WeatherTheme::Snow),
    ("thunderstorm", WeatherTheme::Thunderstorm),
    ("drizzle", WeatherTheme::Drizzle),
    ("mist", WeatherTheme::Mist),
    ("fog", WeatherTheme::Mist),
    ("haze", WeatherTheme::Mist),
];

impl WeatherTheme {
    /// Maps a weather description to a theme with a case-insensitive
    /// substring match.
    ///
    /// Precedence is fixed: `clear`, `cloud`, `rain`, `snow`, `thunderstorm`,
    /// `drizzle`, then `mist`/`fog`/`haze`.
    ///
    /// ```
    /// use moodlog::theme::WeatherTheme;
    ///
    /// assert_eq!(WeatherTheme::resolve(Some("light cloud with rain")), WeatherTheme::Clouds);
    /// assert_eq!(WeatherTheme::resolve(Some("Heavy Snow")), WeatherTheme::Snow);
    /// assert_eq!(WeatherTheme::resolve(None), WeatherTheme::Default);
    /// ```
    pub fn resolve(description: Option<&str>) -> WeatherTheme {
        let Some(description) = description else {
            return WeatherTheme::Default;
        };
        let description = description.to_lowercase();

        KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword))
            .map_or(WeatherTheme::Default, |(_, theme)| *theme)
    }

    pub fn id(self) -> &'static str {
        match self {
            WeatherTheme::Clear => "clear",
            WeatherTheme::Clouds => "clouds",
            WeatherTheme::Rain => "rain",
            WeatherTheme::Snow => "snow",
            WeatherTheme::Thunderstorm => "thunderstorm",
            WeatherTheme::Drizzle => "drizzle",
            WeatherTheme::Mist => "mist",
            WeatherTheme::Default => "default",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherTheme::Clear => "Clear",
            WeatherTheme::Clouds => "Clouds",
            WeatherTheme::Rain => "Rain",
            WeatherTheme::Snow => "Snow",
            WeatherTheme::Thunderstorm => "Thunderstorm",
            WeatherTheme::Drizzle => "Drizzle",
            WeatherTheme::Mist => "Mist",
            WeatherTheme::Default => "Default",
        }
    }

    /// Header icon. The default theme has none.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            WeatherTheme::Clear => Some("☀️"),
            WeatherTheme::Clouds => Some("☁️"),
            WeatherTheme::Rain => Some("🌧️"),
            WeatherTheme::Snow => Some("❄️"),
            WeatherTheme::Thunderstorm => Some("⚡"),
            WeatherTheme::Drizzle => Some("🌦️"),
            WeatherTheme::Mist => Some("🌫️"),
            WeatherTheme::Default => None,
        }
    }
}

impl fmt::Display for WeatherTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
