//! Case-insensitive substring search over note title and content.
//!
//! # Responsibility
//! - Decide whether one note matches a text query.
//! - Apply the optional author restriction before text matching.
//!
//! # Invariants
//! - Matching is case-insensitive via Unicode lowercase folding.
//! - An empty query matches every candidate.
//! - Results keep store order.

use crate::model::note::Note;
use crate::repo::note_repo::NoteListQuery;
use serde::Deserialize;

/// Search options for note text queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSearchQuery {
    /// Substring to look for in title or content.
    pub query: String,
    /// Optional exact-match author restriction.
    #[serde(default)]
    pub author_id: Option<String>,
}

impl NoteSearchQuery {
    /// Creates a query without author restriction.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            author_id: None,
        }
    }

    pub fn with_author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Candidate set the text filter runs over.
    /// An empty author id restricts nothing.
    pub fn candidates(&self) -> NoteListQuery {
        NoteListQuery::by_author(self.author_id.clone())
    }

    /// Returns a matcher with the query folded once.
    pub fn matcher(&self) -> TextMatcher {
        TextMatcher::new(&self.query)
    }
}

/// Pre-folded needle for repeated matching.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Returns whether title or content contains the needle.
    pub fn matches(&self, note: &Note) -> bool {
        contains_folded(&note.title, &self.needle) || contains_folded(&note.content, &self.needle)
    }
}

/// Filters `notes` down to the ones matching `query`, keeping order.
///
/// The author restriction is applied first, then the text match.
pub fn filter_notes(notes: Vec<Note>, query: &NoteSearchQuery) -> Vec<Note> {
    let candidates = query.candidates();
    let matcher = query.matcher();
    notes
        .into_iter()
        .filter(|note| candidates.accepts(note))
        .filter(|note| matcher.matches(note))
        .collect()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || haystack.to_lowercase().contains(folded_needle)
}
