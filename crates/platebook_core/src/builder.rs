//! Plate-set builder.
//!
//! # Responsibility
//! - Shape authored lecture records into note-taking plates.
//! - Own the lazily built platebook for the bundled course.
//!
//! # Invariants
//! - Output length and order equal the input's.
//! - Base fields are copied verbatim; annotation fields start empty.
//! - Building never fails and has no side effects besides a debug event.

use crate::catalog;
use crate::model::plate::{BasePlate, CourseMeta, Plate, PlateKind, Platebook};
use log::debug;
use once_cell::sync::Lazy;

static BUILTIN_PLATEBOOK: Lazy<Platebook> =
    Lazy::new(|| build_platebook(catalog::course_meta(), catalog::base_plates()));

/// Attaches empty annotation fields to one base record.
pub fn shape_plate(base: &BasePlate) -> Plate {
    Plate::blank(base)
}

/// Shapes every base record, preserving order.
pub fn shape_plates(bases: &[BasePlate]) -> Vec<Plate> {
    bases.iter().map(shape_plate).collect()
}

/// Builds a platebook from course metadata and an ordered lecture list.
pub fn build_platebook(meta: CourseMeta, bases: &[BasePlate]) -> Platebook {
    let book = Platebook {
        course: meta.course,
        term: meta.term,
        plates: shape_plates(bases),
    };

    debug!(
        "event=platebook_shape module=builder status=ok plates={} standard={} presentation={}",
        book.len(),
        book.count_kind(PlateKind::Standard),
        book.count_kind(PlateKind::Presentation)
    );
    book
}

/// Returns the platebook for the bundled course.
///
/// Built on first access and shared read-only afterwards.
pub fn builtin_platebook() -> &'static Platebook {
    &BUILTIN_PLATEBOOK
}

#[cfg(test)]
mod tests {
    use super::{build_platebook, shape_plates};
    use crate::model::plate::{BasePlate, CourseMeta};

    #[test]
    fn empty_input_yields_empty_book() {
        let book = build_platebook(CourseMeta::new("c", "t"), &[]);
        assert!(book.is_empty());
        assert_eq!(book.course, "c");
        assert_eq!(book.term, "t");
    }

    #[test]
    fn duplicate_titles_are_not_merged() {
        let bases = [
            BasePlate::from_static("Final presentations", "March 10", false),
            BasePlate::from_static("Final presentations", "March 10", false),
        ];
        assert_eq!(shape_plates(&bases).len(), 2);
    }
}
