//! Core domain logic for course platebooks.
//! This crate owns the plate shape and the bundled course schedule.

pub mod builder;
pub mod catalog;
pub mod import;
pub mod logging;
pub mod model;
pub mod service;

pub use builder::{build_platebook, builtin_platebook, shape_plate, shape_plates};
pub use catalog::{base_plates, course_meta, COURSE_NAME, COURSE_TERM};
pub use import::csv_sheet::{parse_lesson_sheet_csv, parse_lessons_csv, ColumnLayout};
pub use import::lesson::{Lesson, LessonSheet};
pub use import::remote::{fetch_sheet_csv, fetch_sheet_csv_with, FETCH_TIMEOUT};
pub use import::{ImportError, ImportResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::plate::{
    BasePlate, CourseMeta, Plate, PlateKind, Platebook, QuestionPair, QUESTIONS_PER_PLATE,
};
pub use service::platebook_service::{
    table_of_contents, BuiltinLessons, CsvLessonFile, JsonLessonFile, LessonSource,
    PlatebookService, SheetUrlLessons, TocEntry,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
