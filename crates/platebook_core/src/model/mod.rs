//! Domain model for course plates.
//!
//! # Responsibility
//! - Define the authored lecture record and its note-taking projection.
//! - Keep one plate shape for every consumer (CLI, export, editors).
//!
//! # Invariants
//! - Plate order is significant; the plate number is the 1-based position.

pub mod plate;
