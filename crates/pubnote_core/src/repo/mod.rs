//! Repository layer abstraction and in-memory storage.
//!
//! # Responsibility
//! - Define the storage contract the note service depends on.
//! - Keep id allocation next to the collection it indexes.
//!
//! # Invariants
//! - Repository reads return owned copies; callers never alias stored notes.
//! - Missing ids are reported as `None`, not as errors.

pub mod note_repo;
