//! Lesson sheet document.
//!
//! Matches the JSON lessons document the platebook generator consumes:
//! `{ "course", "term", "lessons": [{ "plate_number", "title", "date" }] }`.

use crate::import::{ImportError, ImportResult};
use crate::model::plate::{BasePlate, CourseMeta};
use log::warn;
use serde::{Deserialize, Serialize};

/// One row of a lesson sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Number printed on the plate header, as authored.
    pub plate_number: u32,
    pub title: String,
    pub date: String,
    /// Notes-only presentation session.
    #[serde(default)]
    pub presentation: bool,
}

impl Lesson {
    pub fn to_base_plate(&self) -> BasePlate {
        BasePlate::new(self.title.clone(), self.date.clone(), !self.presentation)
    }
}

/// Course metadata plus its lesson rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSheet {
    pub course: String,
    pub term: String,
    pub lessons: Vec<Lesson>,
}

impl LessonSheet {
    pub fn new(meta: CourseMeta, lessons: Vec<Lesson>) -> Self {
        Self {
            course: meta.course,
            term: meta.term,
            lessons,
        }
    }

    /// Decodes a lessons JSON document.
    ///
    /// # Errors
    /// - `ImportError::Json` when the document does not match the schema.
    /// - `ImportError::NoLessons` when `lessons` is empty.
    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        let sheet: Self = serde_json::from_str(raw)?;
        if sheet.lessons.is_empty() {
            return Err(ImportError::NoLessons);
        }
        Ok(sheet)
    }

    pub fn meta(&self) -> CourseMeta {
        CourseMeta::new(self.course.clone(), self.term.clone())
    }

    /// Maps lessons to base plates in sheet order.
    ///
    /// Plates are numbered by position; an authored number that disagrees is
    /// kept on the lesson and reported at `warn`.
    pub fn to_base_plates(&self) -> Vec<BasePlate> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(index, lesson)| {
                let position = index + 1;
                if lesson.plate_number as usize != position {
                    warn!(
                        "event=lesson_number_mismatch module=import status=ok position={} plate_number={}",
                        position, lesson.plate_number
                    );
                }
                lesson.to_base_plate()
            })
            .collect()
    }
}
