//! Lesson sheet import.
//!
//! # Responsibility
//! - Turn exported or published lesson sheets (CSV or JSON) into authored
//!   base plates.
//! - Report malformed rows with their line number.
//!
//! # Invariants
//! - Lesson order from the source is preserved.
//! - Import never shapes plates itself; that stays in `builder`.

pub mod csv_sheet;
pub mod lesson;
pub mod remote;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type ImportResult<T> = Result<T, ImportError>;

/// Error raised while reading a lesson sheet.
#[derive(Debug)]
pub enum ImportError {
    /// Plate number cell is not a positive integer.
    InvalidPlateNumber { line: u64, value: String },
    /// Source produced no lessons.
    NoLessons,
    /// CSV reader failure.
    Csv(csv::Error),
    /// JSON document could not be decoded.
    Json(serde_json::Error),
    /// Published sheet could not be downloaded.
    Fetch { url: String, source: reqwest::Error },
    /// Source file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlateNumber { line, value } => {
                write!(f, "invalid plate number `{value}` on line {line}")
            }
            Self::NoLessons => write!(f, "lesson sheet contains no lessons"),
            Self::Csv(err) => write!(f, "malformed lesson csv: {err}"),
            Self::Json(err) => write!(f, "malformed lesson json: {err}"),
            Self::Fetch { url, source } => write!(f, "failed to fetch `{url}`: {source}"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Fetch { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidPlateNumber { .. } | Self::NoLessons => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
