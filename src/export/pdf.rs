//! PDF rendering of the journal.
//!
//! Rendering happens in two passes. [`layout`] walks the entries and places
//! every string and rule on A4 pages measured in millimetres from the top-left
//! corner. [`render`] turns that page model into a PDF with `lopdf`, using the
//! built-in Helvetica font.

use crate::constants;
use crate::errors::{AppResult, ExportError};
use crate::journal::{sorted_descending, MoodEntry};
use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const TITLE_Y: f32 = 20.0;
const EXPORTED_ON_Y: f32 = 30.0;
const FIRST_ENTRY_Y: f32 = 50.0;
const NEW_PAGE_Y: f32 = 20.0;
/// An entry starting below this line moves to a new page.
const PAGE_BREAK_Y: f32 = 250.0;
/// A note line below this line continues on a new page.
const NOTE_BREAK_Y: f32 = 280.0;

const LINE_HEIGHT: f32 = 10.0;
const NOTE_LINE_SPACING: f32 = 6.0;

const TITLE_SIZE: f32 = 22.0;
const HEADER_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

const INDIGO: Rgb = Rgb(63, 81, 181);
const GREY: Rgb = Rgb(100, 100, 100);
const NOTE_GREY: Rgb = Rgb(50, 50, 50);
const RULE_GREY: Rgb = Rgb(200, 200, 200);

const MM_TO_PT: f32 = 72.0 / 25.4;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Something drawn on a page. Coordinates are millimetres from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        align: Align,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub marks: Vec<Mark>,
}

impl Page {
    /// Text of every text mark, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.marks
            .iter()
            .filter_map(|mark| match mark {
                Mark::Text { text, .. } => Some(text.as_str()),
                Mark::Rule { .. } => None,
            })
            .collect()
    }

    pub fn rule_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|mark| matches!(mark, Mark::Rule { .. }))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub pages: Vec<Page>,
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = NEW_PAGE_Y;
    }

    fn push(&mut self, mark: Mark) {
        if let Some(page) = self.pages.last_mut() {
            page.marks.push(mark);
        }
    }

    fn text(&mut self, y: f32, size: f32, color: Rgb, text: String) {
        self.push(Mark::Text {
            x: MARGIN,
            y,
            size,
            color,
            align: Align::Left,
            text,
        });
    }
}

/// Header line of one entry, e.g. `Entry: 1/2/2024 - Mood: Very Happy 😄`.
pub fn entry_header(entry: &MoodEntry) -> String {
    format!(
        "Entry: {} - Mood: {} {}",
        entry.date,
        entry.mood.title_case(),
        entry.mood.icon()
    )
}

/// Places every entry on pages, newest first.
pub fn layout(entries: &[MoodEntry], exported_on: NaiveDate) -> PdfLayout {
    let mut cursor = Cursor {
        pages: vec![Page::default()],
        y: FIRST_ENTRY_Y,
    };

    cursor.push(Mark::Text {
        x: PAGE_WIDTH / 2.0,
        y: TITLE_Y,
        size: TITLE_SIZE,
        color: INDIGO,
        align: Align::Center,
        text: "Mood Journal".to_string(),
    });
    cursor.push(Mark::Text {
        x: PAGE_WIDTH / 2.0,
        y: EXPORTED_ON_Y,
        size: BODY_SIZE,
        color: GREY,
        align: Align::Center,
        text: format!(
            "Exported on: {}",
            exported_on.format(constants::ENTRY_DATE_FORMAT)
        ),
    });

    let sorted = sorted_descending(entries);
    let last = sorted.len().saturating_sub(1);

    for (index, entry) in sorted.into_iter().enumerate() {
        if cursor.y > PAGE_BREAK_Y {
            cursor.new_page();
        }

        let y = cursor.y;
        cursor.text(y, HEADER_SIZE, INDIGO, entry_header(entry));
        cursor.y += LINE_HEIGHT * 1.5;

        if let Some(weather) = &entry.weather {
            let y = cursor.y;
            cursor.text(
                y,
                BODY_SIZE,
                GREY,
                format!(
                    "Weather: {}, {}°C",
                    weather.description,
                    weather.rounded_temp()
                ),
            );
            cursor.y += LINE_HEIGHT;
        }

        let mut start = cursor.y;
        let mut placed = 0usize;
        for line in wrap_text(&entry.note, CONTENT_WIDTH, BODY_SIZE) {
            let mut line_y = start + placed as f32 * NOTE_LINE_SPACING;
            if line_y > NOTE_BREAK_Y && placed > 0 {
                cursor.new_page();
                start = cursor.y;
                placed = 0;
                line_y = start;
            }
            cursor.text(line_y, BODY_SIZE, NOTE_GREY, line);
            placed += 1;
        }
        cursor.y = start + placed as f32 * NOTE_LINE_SPACING + LINE_HEIGHT;

        if index < last {
            let y = cursor.y - 5.0;
            cursor.push(Mark::Rule {
                x1: MARGIN,
                x2: PAGE_WIDTH - MARGIN,
                y,
                color: RULE_GREY,
            });
            cursor.y += LINE_HEIGHT;
        }
    }

    PdfLayout {
        pages: cursor.pages,
    }
}

/// Approximate rendered width of `text` in millimetres.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_EM / MM_TO_PT
}

/// Greedy word wrap. Explicit newlines start a new line; words wider than
/// the line are split.
pub fn wrap_text(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(&candidate, size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            let mut piece = String::new();
            for ch in word.chars() {
                piece.push(ch);
                if text_width(&piece, size) > max_width {
                    piece.pop();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(ch);
                }
            }
            current = piece;
        }

        lines.push(current);
    }

    lines
}

/// Encodes text for the WinAnsi-encoded base font. Characters outside that
/// encoding (emoji, most non-Latin scripts) are dropped.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    let bytes: Vec<u8> = text
        .chars()
        .filter_map(|ch| match ch as u32 {
            0x20..=0x7E => Some(ch as u8),
            0xA0..=0xFF => Some(ch as u32 as u8),
            _ => win_ansi_extra(ch),
        })
        .collect();

    let end = bytes
        .iter()
        .rposition(|b| *b != b' ')
        .map_or(0, |pos| pos + 1);
    bytes[..end].to_vec()
}

fn win_ansi_extra(ch: char) -> Option<u8> {
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    [color.0, color.1, color.2]
        .iter()
        .map(|channel| Object::Real(*channel as f32 / 255.0))
        .collect()
}

fn page_operations(page: &Page) -> Vec<Operation> {
    let mut operations = Vec::new();

    for mark in &page.marks {
        match mark {
            Mark::Text {
                x,
                y,
                size,
                color,
                align,
                text,
            } => {
                let encoded = encode_win_ansi(text);
                if encoded.is_empty() {
                    continue;
                }
                let left = match align {
                    Align::Left => *x,
                    Align::Center => x - text_width(text, *size) / 2.0,
                };

                operations.push(Operation::new("rg", color_operands(*color)));
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), Object::Real(*size)],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![
                        Object::Real(left * MM_TO_PT),
                        Object::Real((PAGE_HEIGHT - y) * MM_TO_PT),
                    ],
                ));
                operations.push(Operation::new("Tj", vec![Object::string_literal(encoded)]));
                operations.push(Operation::new("ET", vec![]));
            }
            Mark::Rule { x1, x2, y, color } => {
                let pdf_y = (PAGE_HEIGHT - y) * MM_TO_PT;
                operations.push(Operation::new("RG", color_operands(*color)));
                operations.push(Operation::new("w", vec![Object::Real(0.5)]));
                operations.push(Operation::new(
                    "m",
                    vec![Object::Real(x1 * MM_TO_PT), Object::Real(pdf_y)],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![Object::Real(x2 * MM_TO_PT), Object::Real(pdf_y)],
                ));
                operations.push(Operation::new("S", vec![]));
            }
        }
    }

    operations
}

/// Serializes a page model into PDF bytes.
///
/// # Errors
///
/// Returns `ExportError::Pdf` if a content stream or the document cannot be encoded.
pub fn render(layout: &PdfLayout) -> AppResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Pdf(format!("Failed to encode page content: {}", e)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(PAGE_WIDTH * MM_TO_PT),
            Object::Real(PAGE_HEIGHT * MM_TO_PT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(format!("Failed to write document: {}", e)))?;

    debug!(
        "Rendered PDF with {} pages ({} bytes)",
        layout.pages.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Lays out and renders the journal.
///
/// # Errors
///
/// Returns `ExportError::NoEntries` for an empty journal, or `ExportError::Pdf`
/// if rendering fails.
pub fn to_pdf(entries: &[MoodEntry], exported_on: NaiveDate) -> AppResult<Vec<u8>> {
    if entries.is_empty() {
        return Err(ExportError::NoEntries.into());
    }
    render(&layout(entries, exported_on))
}
