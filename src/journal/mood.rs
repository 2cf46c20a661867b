//! The mood taxonomy.
//!
//! `Mood` is the closed set of categories a user can pick. Stored entries may
//! still carry strings outside that set (older data, hand edits), so the entry
//! model holds a `MoodKey` that keeps unknown values verbatim and falls back to
//! default styling wherever display metadata is needed.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five mood categories, ordered from lowest to highest trend value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Angry,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl Mood {
    /// Every mood in picker order (highest first).
    pub const ALL: [Mood; 5] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
    ];

    /// The storage key, e.g. `very-happy`.
    pub fn key(self) -> &'static str {
        match self {
            Mood::VeryHappy => "very-happy",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mood::VeryHappy => "😄",
            Mood::Happy => "🙂",
            Mood::Neutral => "😐",
            Mood::Sad => "😞",
            Mood::Angry => "😡",
        }
    }

    /// Chart color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Mood::VeryHappy => "#4ade80",
            Mood::Happy => "#34d399",
            Mood::Neutral => "#60a5fa",
            Mood::Sad => "#c084fc",
            Mood::Angry => "#f87171",
        }
    }

    /// Position on the trend chart's y-axis, 1 (angry) to 5 (very happy).
    pub fn trend_value(self) -> u8 {
        match self {
            Mood::Angry => 1,
            Mood::Sad => 2,
            Mood::Neutral => 3,
            Mood::Happy => 4,
            Mood::VeryHappy => 5,
        }
    }

    /// Inverse of `trend_value`.
    pub fn from_trend_value(value: u8) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.trend_value() == value)
    }

    /// Parses a storage key. Matching is exact.
    pub fn from_key(key: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.key() == key)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::from_key(s).ok_or_else(|| {
            format!(
                "Unknown mood '{}'. Expected one of: {}",
                s,
                Mood::ALL.map(Mood::key).join(", ")
            )
        })
    }
}

/// The mood field of a stored entry.
///
/// Serializes as the bare string, so both taxonomy moods and unknown values
/// round-trip unchanged.
///
/// ```
/// use moodlog::journal::{Mood, MoodKey};
///
/// let known = MoodKey::from("happy");
/// assert_eq!(known.mood(), Some(Mood::Happy));
///
/// let unknown = MoodKey::from("ecstatic");
/// assert_eq!(unknown.mood(), None);
/// assert_eq!(unknown.trend_value(), 3);
/// assert_eq!(unknown.as_str(), "ecstatic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodKey {
    Known(Mood),
    Other(String),
}

impl MoodKey {
    pub fn mood(&self) -> Option<Mood> {
        match self {
            MoodKey::Known(mood) => Some(*mood),
            MoodKey::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoodKey::Known(mood) => mood.key(),
            MoodKey::Other(raw) => raw,
        }
    }

    /// Display label, `Unknown` outside the taxonomy.
    pub fn label(&self) -> &'static str {
        self.mood().map_or("Unknown", Mood::label)
    }

    /// Icon, empty outside the taxonomy.
    pub fn icon(&self) -> &'static str {
        self.mood().map_or("", Mood::icon)
    }

    pub fn color(&self) -> &'static str {
        self.mood()
            .map_or(constants::DEFAULT_MOOD_COLOR, Mood::color)
    }

    pub fn trend_value(&self) -> u8 {
        self.mood()
            .map_or(constants::DEFAULT_TREND_VALUE, Mood::trend_value)
    }

    /// Title Case rendering of the raw key: `very-happy` becomes `Very Happy`.
    pub fn title_case(&self) -> String {
        title_case(self.as_str())
    }
}

impl From<Mood> for MoodKey {
    fn from(mood: Mood) -> Self {
        MoodKey::Known(mood)
    }
}

impl From<String> for MoodKey {
    fn from(raw: String) -> Self {
        match Mood::from_key(&raw) {
            Some(mood) => MoodKey::Known(mood),
            None => MoodKey::Other(raw),
        }
    }
}

impl From<&str> for MoodKey {
    fn from(raw: &str) -> Self {
        MoodKey::from(raw.to_string())
    }
}

impl From<MoodKey> for String {
    fn from(key: MoodKey) -> Self {
        match key {
            MoodKey::Known(mood) => mood.key().to_string(),
            MoodKey::Other(raw) => raw,
        }
    }
}

impl fmt::Display for MoodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn title_case(raw: &str) -> String {
    raw.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
