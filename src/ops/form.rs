//! The entry form: validation and save.

use crate::constants;
use crate::errors::{AppResult, ValidationError};
use crate::journal::{EntryDate, EntryStore, MoodEntry, MoodKey};
use crate::storage::KeyValueStore;
use crate::weather::WeatherReport;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub mood: Option<String>,
    pub note: String,
}

impl EntryForm {
    pub fn new(mood: Option<&str>, note: impl Into<String>) -> Self {
        Self {
            mood: mood.map(str::to_string),
            note: note.into(),
        }
    }

    /// Checks that a mood is picked and the note has content.
    ///
    /// Moods outside the taxonomy are accepted and kept verbatim.
    ///
    /// ```
    /// use moodlog::errors::ValidationError;
    /// use moodlog::ops::EntryForm;
    ///
    /// assert_eq!(EntryForm::new(Some("happy"), "   ").validate(), Err(ValidationError::MissingNote));
    /// assert_eq!(EntryForm::new(None, "hello").validate(), Err(ValidationError::MissingMood));
    /// ```
    pub fn validate(&self) -> Result<MoodKey, ValidationError> {
        let mood = self
            .mood
            .as_deref()
            .filter(|mood| !mood.trim().is_empty())
            .ok_or(ValidationError::MissingMood)?;

        if self.note.trim().is_empty() {
            return Err(ValidationError::MissingNote);
        }

        Ok(MoodKey::from(mood))
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEntry {
    pub entry: MoodEntry,
    pub message: &'static str,
}

/// Validates the form and appends a new entry dated `today`.
///
/// The note is stored as typed. `weather` is the widget's current report,
/// if any; only its snapshot is persisted.
///
/// # Errors
///
/// Returns an error if:
/// - The form is incomplete, in which case nothing is stored
/// - The store cannot be written
pub fn save_entry<S: KeyValueStore>(
    store: &mut EntryStore<S>,
    form: &EntryForm,
    today: NaiveDate,
    weather: Option<&WeatherReport>,
) -> AppResult<SavedEntry> {
    let mood = form.validate()?;

    let entry = MoodEntry::new(
        EntryDate::from_date(today),
        mood,
        form.note.clone(),
        weather.map(WeatherReport::snapshot),
    );
    debug!(
        "Saving entry for {} (weather attached: {})",
        entry.date,
        entry.weather.is_some()
    );

    store.append(entry.clone())?;
    info!("Saved {} entry for {}", entry.mood, entry.date);

    Ok(SavedEntry {
        entry,
        message: constants::SAVED_MESSAGE,
    })
}
