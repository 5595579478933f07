//! CSV lesson sheet parser.
//!
//! # Responsibility
//! - Parse a published lesson spreadsheet (CSV export) into lessons.
//!
//! # Invariants
//! - The first row is a header and is never read as a lesson.
//! - Rows with fewer than three cells are skipped, not rejected.
//! - Cell text is trimmed and inner whitespace collapsed to one space.
//! - The presentation marker is read only when the header names a fourth
//!   column, so stray cells from unquoted commas never flag a lesson.

use crate::import::lesson::{Lesson, LessonSheet};
use crate::import::{ImportError, ImportResult};
use crate::model::plate::CourseMeta;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const PRESENTATION_COLUMN: usize = 3;
const TRUTHY_CELLS: &[&str] = &["true", "yes", "y", "1", "x"];

/// Column order of the lesson sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnLayout {
    /// `plate_number, title, date` (local CSV exports).
    #[default]
    NumberTitleDate,
    /// `plate_number, date, title` (published Google Sheet).
    NumberDateTitle,
}

impl ColumnLayout {
    fn title_and_date<'r>(self, record: &'r StringRecord) -> (&'r str, &'r str) {
        let second = record.get(1).unwrap_or_default();
        let third = record.get(2).unwrap_or_default();
        match self {
            Self::NumberTitleDate => (second, third),
            Self::NumberDateTitle => (third, second),
        }
    }
}

impl Display for ColumnLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberTitleDate => write!(f, "number-title-date"),
            Self::NumberDateTitle => write!(f, "number-date-title"),
        }
    }
}

impl FromStr for ColumnLayout {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "number-title-date" | "ntd" => Ok(Self::NumberTitleDate),
            "number-date-title" | "ndt" | "sheet" => Ok(Self::NumberDateTitle),
            other => Err(format!(
                "unsupported column layout `{other}`; expected number-title-date|number-date-title"
            )),
        }
    }
}

/// Parses lesson rows from CSV text.
///
/// # Errors
/// - `ImportError::InvalidPlateNumber` when the first cell is not a positive
///   integer.
/// - `ImportError::Csv` when the reader fails (for example invalid UTF-8).
/// - `ImportError::NoLessons` when no row yields a lesson.
pub fn parse_lessons_csv(raw: &str, layout: ColumnLayout) -> ImportResult<Vec<Lesson>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(raw.as_bytes());

    let has_marker_column = reader.headers()?.len() > PRESENTATION_COLUMN;

    let mut lessons = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 3 {
            continue;
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let plate_number = parse_plate_number(record.get(0).unwrap_or_default(), line)?;
        let (title, date) = layout.title_and_date(&record);
        let presentation = has_marker_column
            && record
                .get(PRESENTATION_COLUMN)
                .map(is_truthy_cell)
                .unwrap_or(false);

        lessons.push(Lesson {
            plate_number,
            title: clean_cell(title),
            date: clean_cell(date),
            presentation,
        });
    }

    if lessons.is_empty() {
        return Err(ImportError::NoLessons);
    }

    info!(
        "event=lesson_csv_parse module=import status=ok layout={} lessons={}",
        layout,
        lessons.len()
    );
    Ok(lessons)
}

/// Parses a CSV sheet and pairs it with course metadata.
pub fn parse_lesson_sheet_csv(
    raw: &str,
    layout: ColumnLayout,
    meta: CourseMeta,
) -> ImportResult<LessonSheet> {
    let lessons = parse_lessons_csv(raw, layout)?;
    Ok(LessonSheet::new(meta, lessons))
}

fn parse_plate_number(cell: &str, line: u64) -> ImportResult<u32> {
    match cell.trim().parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ImportError::InvalidPlateNumber {
            line,
            value: cell.to_string(),
        }),
    }
}

fn clean_cell(value: &str) -> String {
    let unquoted = value.replace('"', "");
    WHITESPACE_RE.replace_all(unquoted.trim(), " ").into_owned()
}

fn is_truthy_cell(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    TRUTHY_CELLS.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::{clean_cell, is_truthy_cell, ColumnLayout};

    #[test]
    fn clean_cell_collapses_whitespace_and_quotes() {
        assert_eq!(clean_cell("  \"Joseon   Reform\" "), "Joseon Reform");
        assert_eq!(clean_cell("Jan\t6"), "Jan 6");
    }

    #[test]
    fn truthy_cells_are_case_insensitive() {
        assert!(is_truthy_cell(" YES "));
        assert!(is_truthy_cell("x"));
        assert!(!is_truthy_cell(""));
        assert!(!is_truthy_cell("no"));
    }

    #[test]
    fn layout_parses_known_names() {
        assert_eq!(
            "number-date-title".parse::<ColumnLayout>().unwrap(),
            ColumnLayout::NumberDateTitle
        );
        assert_eq!("NTD".parse::<ColumnLayout>().unwrap(), ColumnLayout::NumberTitleDate);
        assert!("title-first".parse::<ColumnLayout>().is_err());
    }
}
