//! Journal export to CSV and PDF files.
//!
//! Content is built fully in memory first; an empty journal is rejected
//! before anything touches the filesystem. Files are written through a
//! temporary file in the target directory and moved into place, so a failed
//! export never leaves a partial file behind.

pub mod csv;
pub mod pdf;

use crate::constants;
use crate::errors::{AppResult, ExportError};
use crate::journal::MoodEntry;
use chrono::NaiveDate;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!(
                "Unknown export format '{}'. Expected csv or pdf",
                other
            )),
        }
    }
}

/// File name for an export made on `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use moodlog::export::{file_name, ExportFormat};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(file_name(ExportFormat::Csv, date), "mood-journal-export-2024-03-07.csv");
/// ```
pub fn file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        constants::EXPORT_FILE_PREFIX,
        date.format(constants::DATE_FORMAT_ISO),
        format.extension()
    )
}

/// Renders `entries` in the given format.
pub fn render(entries: &[MoodEntry], format: ExportFormat, today: NaiveDate) -> AppResult<Vec<u8>> {
    match format {
        ExportFormat::Csv => csv::to_csv(entries).map(String::into_bytes),
        ExportFormat::Pdf => pdf::to_pdf(entries, today),
    }
}

/// Exports the journal into `dir` and returns the written path.
///
/// An existing export from the same day is replaced.
///
/// # Errors
///
/// Returns an error if:
/// - The journal is empty (`ExportError::NoEntries`), in which case no file is created
/// - PDF rendering fails
/// - The file cannot be written to `dir`
pub fn export_to_dir(
    entries: &[MoodEntry],
    format: ExportFormat,
    dir: &Path,
    today: NaiveDate,
) -> AppResult<PathBuf> {
    let content = render(entries, format, today)?;
    let path = dir.join(file_name(format, today));
    debug!("Writing {} bytes of {} export to {:?}", content.len(), format, path);

    let write_error = |source: std::io::Error| ExportError::Write {
        path: path.clone(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(&content).map_err(write_error)?;
    temp.flush().map_err(write_error)?;
    temp.persist(&path).map_err(|e| write_error(e.error))?;

    info!("Exported {} entries to {:?}", entries.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::journal::Mood;
    use std::fs;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn entries() -> Vec<MoodEntry> {
        vec![
            MoodEntry::new("3/6/2024".into(), Mood::Happy, "Walked the dog", None),
            MoodEntry::new("3/7/2024".into(), Mood::Sad, "Rainy", None),
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(
            file_name(ExportFormat::Pdf, today()),
            "mood-journal-export-2024-03-07.pdf"
        );
    }

    #[test]
    fn test_csv_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = export_to_dir(&entries(), ExportFormat::Csv, dir.path(), today()).unwrap();

        assert_eq!(path, dir.path().join("mood-journal-export-2024-03-07.csv"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Date,Mood,Note,Temperature,Weather\n"));
        assert!(content.contains("3/6/2024,happy,Walked the dog,,"));
    }

    #[test]
    fn test_pdf_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = export_to_dir(&entries(), ExportFormat::Pdf, dir.path(), today()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_export_creates_nothing() {
        let dir = tempdir().unwrap();

        for format in [ExportFormat::Csv, ExportFormat::Pdf] {
            let result = export_to_dir(&[], format, dir.path(), today());
            assert!(matches!(
                result,
                Err(AppError::Export(ExportError::NoEntries))
            ));
        }

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory_is_a_write_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = export_to_dir(&entries(), ExportFormat::Csv, &missing, today());
        assert!(matches!(
            result,
            Err(AppError::Export(ExportError::Write { .. }))
        ));
    }
}
