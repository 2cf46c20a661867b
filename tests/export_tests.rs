use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

use moodlog::errors::{AppError, ExportError};
use moodlog::export::{export_to_dir, pdf, ExportFormat};
use moodlog::journal::{Mood, MoodEntry, WeatherSnapshot};

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn journal() -> Vec<MoodEntry> {
    vec![
        MoodEntry::new(
            "5/30/2024".into(),
            Mood::VeryHappy,
            "Beach day, finally",
            Some(WeatherSnapshot {
                temp: 26.5,
                description: "clear sky".to_string(),
                icon: "https://openweathermap.org/img/wn/01d@2x.png".to_string(),
            }),
        ),
        MoodEntry::new("5/31/2024".into(), Mood::Angry, "He said \"no\"", None),
    ]
}

#[test]
fn test_csv_export_file_contents() {
    let dir = tempdir().unwrap();
    let path = export_to_dir(&journal(), ExportFormat::Csv, dir.path(), export_date()).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "mood-journal-export-2024-06-01.csv"
    );
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Date,Mood,Note,Temperature,Weather\n\
         5/30/2024,very-happy,\"Beach day, finally\",27,clear sky\n\
         5/31/2024,angry,\"He said \"\"no\"\"\",,\n"
    );
}

#[test]
fn test_pdf_export_is_a_document() {
    let dir = tempdir().unwrap();
    let path = export_to_dir(&journal(), ExportFormat::Pdf, dir.path(), export_date()).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "mood-journal-export-2024-06-01.pdf"
    );
    let bytes = fs::read(&path).unwrap();
    let document = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(document.get_pages().len(), 1);
}

#[test]
fn test_pdf_layout_orders_newest_first() {
    let layout = pdf::layout(&journal(), export_date());
    let texts = layout.pages[0].texts();

    let newest = texts
        .iter()
        .position(|t| *t == "Entry: 5/31/2024 - Mood: Angry 😡")
        .unwrap();
    let oldest = texts
        .iter()
        .position(|t| *t == "Entry: 5/30/2024 - Mood: Very Happy 😄")
        .unwrap();
    assert!(newest < oldest);
    assert!(texts.contains(&"Weather: clear sky, 27°C"));
    assert_eq!(layout.pages[0].rule_count(), 1);
}

#[test]
fn test_empty_journal_exports_nothing() {
    let dir = tempdir().unwrap();

    for format in [ExportFormat::Csv, ExportFormat::Pdf] {
        let err = export_to_dir(&[], format, dir.path(), export_date()).unwrap_err();
        assert!(matches!(err, AppError::Export(ExportError::NoEntries)));
        assert_eq!(err.to_string(), "No entries to export");
    }

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_replaces_same_day_file() {
    let dir = tempdir().unwrap();

    export_to_dir(&journal()[..1], ExportFormat::Csv, dir.path(), export_date()).unwrap();
    let path = export_to_dir(&journal(), ExportFormat::Csv, dir.path(), export_date()).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    assert_eq!(fs::read_to_string(path).unwrap().lines().count(), 3);
}
