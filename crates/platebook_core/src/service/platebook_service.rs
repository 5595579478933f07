//! Platebook use-case service.
//!
//! # Responsibility
//! - Load a lesson sheet from a bundled, on-disk, or published source and
//!   shape it into a platebook.
//! - Derive the table of contents shown at the front of a platebook.
//!
//! # Invariants
//! - Shaping always goes through `builder::build_platebook`.
//! - Table of contents numbers are 1-based plate positions.

use crate::builder::build_platebook;
use crate::catalog;
use crate::import::csv_sheet::{parse_lesson_sheet_csv, ColumnLayout};
use crate::import::lesson::{Lesson, LessonSheet};
use crate::import::remote::{fetch_sheet_csv, fetch_sheet_csv_with};
use crate::import::{ImportError, ImportResult};
use crate::model::plate::{CourseMeta, PlateKind, Platebook};
use log::{error, info};
use reqwest::blocking::Client;
use std::path::{Path, PathBuf};

/// Source of lesson rows for a platebook.
pub trait LessonSource {
    /// Short label used in diagnostics (`builtin`, `csv`, `sheet_url`, `json`).
    fn label(&self) -> &'static str;
    /// Loads the full lesson sheet.
    fn load(&self) -> ImportResult<LessonSheet>;
}

/// The bundled course schedule.
#[derive(Debug, Clone, Default)]
pub struct BuiltinLessons;

impl LessonSource for BuiltinLessons {
    fn label(&self) -> &'static str {
        "builtin"
    }

    fn load(&self) -> ImportResult<LessonSheet> {
        let lessons = catalog::base_plates()
            .iter()
            .enumerate()
            .map(|(index, base)| Lesson {
                plate_number: index as u32 + 1,
                title: base.title.to_string(),
                date: base.date.to_string(),
                presentation: !base.full,
            })
            .collect();
        Ok(LessonSheet::new(catalog::course_meta(), lessons))
    }
}

/// Lesson sheet exported as CSV on disk.
#[derive(Debug, Clone)]
pub struct CsvLessonFile {
    pub path: PathBuf,
    pub layout: ColumnLayout,
    pub meta: CourseMeta,
}

impl CsvLessonFile {
    pub fn new(path: impl Into<PathBuf>, layout: ColumnLayout, meta: CourseMeta) -> Self {
        Self {
            path: path.into(),
            layout,
            meta,
        }
    }
}

impl LessonSource for CsvLessonFile {
    fn label(&self) -> &'static str {
        "csv"
    }

    fn load(&self) -> ImportResult<LessonSheet> {
        let raw = read_source(&self.path)?;
        parse_lesson_sheet_csv(&raw, self.layout, self.meta.clone())
    }
}

/// Published lesson sheet fetched as CSV over HTTP.
///
/// Uses a client with the default fetch timeout unless one is supplied.
#[derive(Debug, Clone)]
pub struct SheetUrlLessons {
    pub url: String,
    pub layout: ColumnLayout,
    pub meta: CourseMeta,
    client: Option<Client>,
}

impl SheetUrlLessons {
    pub fn new(url: impl Into<String>, layout: ColumnLayout, meta: CourseMeta) -> Self {
        Self {
            url: url.into(),
            layout,
            meta,
            client: None,
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

impl LessonSource for SheetUrlLessons {
    fn label(&self) -> &'static str {
        "sheet_url"
    }

    fn load(&self) -> ImportResult<LessonSheet> {
        let raw = match &self.client {
            Some(client) => fetch_sheet_csv_with(client, &self.url)?,
            None => fetch_sheet_csv(&self.url)?,
        };
        parse_lesson_sheet_csv(&raw, self.layout, self.meta.clone())
    }
}

/// Lessons JSON document on disk.
///
/// `course` and `term` overrides replace the document's values one field at
/// a time; an unset override keeps what the document says.
#[derive(Debug, Clone)]
pub struct JsonLessonFile {
    pub path: PathBuf,
    pub course_override: Option<String>,
    pub term_override: Option<String>,
}

impl JsonLessonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            course_override: None,
            term_override: None,
        }
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course_override = Some(course.into());
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term_override = Some(term.into());
        self
    }
}

impl LessonSource for JsonLessonFile {
    fn label(&self) -> &'static str {
        "json"
    }

    fn load(&self) -> ImportResult<LessonSheet> {
        let raw = read_source(&self.path)?;
        let mut sheet = LessonSheet::from_json_str(&raw)?;
        if let Some(course) = &self.course_override {
            sheet.course = course.clone();
        }
        if let Some(term) = &self.term_override {
            sheet.term = term.clone();
        }
        Ok(sheet)
    }
}

/// One row of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub number: usize,
    pub title: String,
    pub date: String,
    pub kind: PlateKind,
}

/// Platebook service facade over a lesson source.
pub struct PlatebookService<S: LessonSource> {
    source: S,
}

impl<S: LessonSource> PlatebookService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the lesson sheet and shapes it into a platebook.
    pub fn build(&self) -> Result<Platebook, ImportError> {
        let sheet = self.source.load().inspect_err(|err| {
            error!(
                "event=platebook_build module=service status=error source={} error={}",
                self.source.label(),
                err
            );
        })?;

        let book = build_platebook(sheet.meta(), &sheet.to_base_plates());
        info!(
            "event=platebook_build module=service status=ok source={} plates={}",
            self.source.label(),
            book.len()
        );
        Ok(book)
    }
}

/// Lists plate number, title, date and kind in plate order.
pub fn table_of_contents(book: &Platebook) -> Vec<TocEntry> {
    book.plates
        .iter()
        .enumerate()
        .map(|(index, plate)| TocEntry {
            number: index + 1,
            title: plate.title.clone(),
            date: plate.date.clone(),
            kind: plate.kind(),
        })
        .collect()
}

fn read_source(path: &Path) -> ImportResult<String> {
    std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
