//! Search module entry.
//!
//! # Responsibility
//! - Expose text search over notes.

pub mod text;

pub use text::{filter_notes, NoteSearchQuery, TextMatcher};
