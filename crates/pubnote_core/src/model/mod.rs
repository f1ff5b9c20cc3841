//! Domain model for the note resource.
//!
//! # Responsibility
//! - Define the canonical note record and its create-time input shape.
//!
//! # Invariants
//! - Every note is identified by a store-assigned `NoteId`.
//! - Deletion removes a note outright; there are no tombstones.

pub mod note;
