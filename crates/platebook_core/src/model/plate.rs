//! Plate domain model.
//!
//! # Responsibility
//! - Define the authored lecture record (`BasePlate`) and its note-taking
//!   projection (`Plate`).
//! - Keep the wire shape of the shaped record stable for consumers.
//!
//! # Invariants
//! - A `Plate` always carries exactly two question pairs.
//! - Base fields (`title`, `date`, `full`) are copied verbatim into `Plate`.
//! - Fresh annotation fields are empty strings, never absent.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Number of penetrating-question rows printed on every standard plate.
pub const QUESTIONS_PER_PLATE: usize = 2;

/// Course name and term shown on the cover of a platebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMeta {
    pub course: String,
    pub term: String,
}

impl CourseMeta {
    pub fn new(course: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            term: term.into(),
        }
    }
}

/// Layout family of a plate, derived from the `full` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateKind {
    /// Regular lecture plate with the full annotation grid.
    Standard,
    /// Notes-only plate used for final presentations.
    Presentation,
}

impl PlateKind {
    pub fn from_full(full: bool) -> Self {
        if full {
            Self::Standard
        } else {
            Self::Presentation
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Presentation => "presentation",
        }
    }
}

/// One scheduled class session as authored.
///
/// Text fields are `Cow` so the built-in course can live in a `const` slice
/// while imported lessons own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePlate {
    /// Human-readable topic.
    pub title: Cow<'static, str>,
    /// Informal date label such as `Jan 6`. Not parsed.
    pub date: Cow<'static, str>,
    /// `false` marks a notes-only presentation plate.
    pub full: bool,
}

impl BasePlate {
    /// Builds a base record from static literals. Usable in `const` context.
    pub const fn from_static(title: &'static str, date: &'static str, full: bool) -> Self {
        Self {
            title: Cow::Borrowed(title),
            date: Cow::Borrowed(date),
            full,
        }
    }

    pub fn new(title: impl Into<String>, date: impl Into<String>, full: bool) -> Self {
        Self {
            title: Cow::Owned(title.into()),
            date: Cow::Owned(date.into()),
            full,
        }
    }

    pub fn kind(&self) -> PlateKind {
        PlateKind::from_full(self.full)
    }
}

/// A question and its very short answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    pub q: String,
    pub a: String,
}

impl QuestionPair {
    pub fn is_blank(&self) -> bool {
        self.q.is_empty() && self.a.is_empty()
    }
}

/// A base record plus its note-taking fields.
///
/// Serialized with the camelCase field names consumers already read
/// (`causesEffectsConnections`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub title: String,
    pub date: String,
    pub full: bool,
    pub person: String,
    pub place: String,
    pub thing: String,
    pub timeline: String,
    pub map: String,
    pub questions: [QuestionPair; QUESTIONS_PER_PLATE],
    pub causes_effects_connections: String,
    pub notes: String,
}

impl Plate {
    /// Creates a plate from `base` with every annotation field empty.
    pub fn blank(base: &BasePlate) -> Self {
        Self {
            title: base.title.to_string(),
            date: base.date.to_string(),
            full: base.full,
            person: String::new(),
            place: String::new(),
            thing: String::new(),
            timeline: String::new(),
            map: String::new(),
            questions: Default::default(),
            causes_effects_connections: String::new(),
            notes: String::new(),
        }
    }

    /// Returns the authored part of this plate.
    pub fn base(&self) -> BasePlate {
        BasePlate::new(self.title.clone(), self.date.clone(), self.full)
    }

    pub fn kind(&self) -> PlateKind {
        PlateKind::from_full(self.full)
    }

    /// Returns whether no annotation has been written yet.
    pub fn is_unannotated(&self) -> bool {
        [
            &self.person,
            &self.place,
            &self.thing,
            &self.timeline,
            &self.map,
            &self.causes_effects_connections,
            &self.notes,
        ]
        .iter()
        .all(|field| field.is_empty())
            && self.questions.iter().all(QuestionPair::is_blank)
    }
}

/// Course metadata plus the ordered plate sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platebook {
    pub course: String,
    pub term: String,
    pub plates: Vec<Plate>,
}

impl Platebook {
    pub fn meta(&self) -> CourseMeta {
        CourseMeta::new(self.course.clone(), self.term.clone())
    }

    /// Looks up a plate by its 1-based plate number.
    pub fn plate(&self, number: usize) -> Option<&Plate> {
        number.checked_sub(1).and_then(|index| self.plates.get(index))
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Counts plates of the given kind.
    pub fn count_kind(&self, kind: PlateKind) -> usize {
        self.plates.iter().filter(|plate| plate.kind() == kind).count()
    }
}
