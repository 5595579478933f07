//! Built-in course schedule.
//!
//! # Responsibility
//! - Hold the authored lecture list for the bundled course.
//!
//! # Invariants
//! - Entries are in class order; the last three are notes-only plates.

use crate::model::plate::{BasePlate, CourseMeta};

pub const COURSE_NAME: &str = "HIST 213 East Asia in the Modern World";
pub const COURSE_TERM: &str = "Winter 2026";

const BASE_PLATES: &[BasePlate] = &[
    BasePlate::from_static("Introduction to the class, geography", "Jan 6", true),
    BasePlate::from_static("East Asian Language, Religion, Culture", "Jan 8", true),
    BasePlate::from_static("What is Modernity?", "Jan 10", true),
    BasePlate::from_static("Joseon Invaded", "Jan 13", true),
    BasePlate::from_static("Rise of Qing, Creation of Manchu Empire", "Jan 15", true),
    BasePlate::from_static("Qing's Encounter with the West", "Jan 17", true),
    BasePlate::from_static("Joseon Reform", "Jan 22", true),
    BasePlate::from_static("Rise of Tokugawa", "Jan 24", true),
    BasePlate::from_static("Final presentation brainstorm / Current events", "Jan 27", true),
    BasePlate::from_static("Qing vs. the West", "Jan 29", true),
    BasePlate::from_static("Tokugawa vs. the West", "Jan 31", true),
    BasePlate::from_static("Meiji \u{201c}Transformation\u{201d}", "Feb 3", true),
    BasePlate::from_static("Taiping and other rebellions", "Feb 5", true),
    BasePlate::from_static("Tonghak Rebellion", "Feb 7", true),
    BasePlate::from_static("Joseon's Slow Evolution", "Feb 10", true),
    BasePlate::from_static("Tonghak in Film", "Feb 12", true),
    BasePlate::from_static("Japanese Nationalism \u{2013} Rise of an empire", "Feb 17", true),
    BasePlate::from_static("Korean Nationalism \u{2013} Rise of a nation", "Feb 19", true),
    BasePlate::from_static(
        "Chinese Nationalism \u{2013} \u{201c}modernity\u{201d} at gunpoint",
        "Feb 21",
        true,
    ),
    BasePlate::from_static("The Pacific War", "Feb 24", true),
    BasePlate::from_static("Civil War and Revolution in China", "Feb 26", true),
    BasePlate::from_static("Rebuilding Japan", "Feb 28", true),
    BasePlate::from_static("Mao and Beyond Mao", "March 3", true),
    BasePlate::from_static("Liberation, Division, Rebuilding Korea", "March 5", true),
    BasePlate::from_static("Japan rises again", "March 7", true),
    // Notes-only plates.
    BasePlate::from_static("Final presentations", "March 10", false),
    BasePlate::from_static("Final presentations", "March 12", false),
    BasePlate::from_static("Final presentations", "March 14", false),
];

/// Returns the bundled course name and term.
pub fn course_meta() -> CourseMeta {
    CourseMeta::new(COURSE_NAME, COURSE_TERM)
}

/// Returns the bundled lecture list in class order.
pub fn base_plates() -> &'static [BasePlate] {
    BASE_PLATES
}
