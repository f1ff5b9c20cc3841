//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered note collection and the id counter.
//! - Provide exact-match lookups and author-filtered listing.
//!
//! # Invariants
//! - Collection order is insertion order.
//! - Ids come from a monotonic counter and are never reused after deletion.
//! - No two live notes share an id.

use crate::model::note::{Note, NoteDraft, NoteId};
use chrono::{DateTime, TimeZone, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository integrity error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Two notes would share the same id.
    DuplicateId(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate note id: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Query options for note listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    /// Optional exact-match author filter.
    pub author_id: Option<String>,
}

impl NoteListQuery {
    /// Builds a filter; an empty author id means no filter.
    pub fn by_author(author_id: Option<String>) -> Self {
        Self {
            author_id: author_id.filter(|value| !value.is_empty()),
        }
    }

    /// Returns whether `note` passes the author filter.
    pub fn accepts(&self, note: &Note) -> bool {
        match self.author_id.as_deref() {
            Some(author_id) => note.is_authored_by(author_id),
            None => true,
        }
    }
}

/// Repository interface for note storage.
pub trait NoteRepository {
    /// Assigns the next id to `draft` and appends it.
    fn insert_note(&mut self, draft: NoteDraft) -> RepoResult<Note>;
    /// Gets the first note with `id`.
    fn get_note(&self, id: &str) -> Option<Note>;
    /// Lists notes in store order, optionally filtered by author.
    fn list_notes(&self, query: &NoteListQuery) -> Vec<Note>;
    /// Removes the first note with `id`, returning it.
    fn remove_note(&mut self, id: &str) -> Option<Note>;
    /// Number of live notes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed note repository.
#[derive(Debug, Clone)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
    next_id: u64,
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNoteRepository {
    /// Creates an empty repository whose first id is `"1"`.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a repository holding the welcome notes (`"1"`, `"2"`).
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        for draft in welcome_notes() {
            let id = repo.allocate_id();
            repo.notes.push(draft.into_note(id));
        }
        repo
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id.to_string()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn insert_note(&mut self, draft: NoteDraft) -> RepoResult<Note> {
        let id = self.allocate_id();
        if self.position(&id).is_some() {
            return Err(RepoError::DuplicateId(id));
        }

        let note = draft.into_note(id);
        self.notes.push(note.clone());
        Ok(note)
    }

    fn get_note(&self, id: &str) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    fn list_notes(&self, query: &NoteListQuery) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| query.accepts(note))
            .cloned()
            .collect()
    }

    fn remove_note(&mut self, id: &str) -> Option<Note> {
        let index = self.position(id)?;
        Some(self.notes.remove(index))
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}

/// Author id carried by the welcome notes.
pub const WELCOME_AUTHOR_ID: &str = "public";

/// Returns the two welcome notes a fresh public server starts with.
pub fn welcome_notes() -> Vec<NoteDraft> {
    vec![
        NoteDraft {
            title: "Welcome Note".to_string(),
            content: "This is a public note that anyone can access.".to_string(),
            author_id: WELCOME_AUTHOR_ID.to_string(),
            created_at: seed_timestamp(2024, 1, 1),
        },
        NoteDraft {
            title: "Getting Started".to_string(),
            content: "This server has no authentication - all data is public.".to_string(),
            author_id: WELCOME_AUTHOR_ID.to_string(),
            created_at: seed_timestamp(2024, 1, 2),
        },
    ]
}

fn seed_timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

#[cfg(test)]
mod tests {
    use super::{InMemoryNoteRepository, NoteListQuery, NoteRepository};
    use crate::model::note::NewNote;
    use chrono::Utc;

    fn draft(title: &str) -> crate::model::note::NoteDraft {
        NewNote::new(title, "").into_draft(Utc::now())
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut repo = InMemoryNoteRepository::new();
        let first = repo.insert_note(draft("a")).unwrap();
        let second = repo.insert_note(draft("b")).unwrap();
        assert!(repo.remove_note(&first.id).is_some());

        let third = repo.insert_note(draft("c")).unwrap();
        assert_eq!(third.id, "3");
        assert_ne!(third.id, second.id);
    }

    #[test]
    fn seeded_repository_continues_after_welcome_notes() {
        let mut repo = InMemoryNoteRepository::seeded();
        assert_eq!(repo.len(), 2);
        let created = repo.insert_note(draft("next")).unwrap();
        assert_eq!(created.id, "3");
    }

    #[test]
    fn empty_author_filter_lists_every_note() {
        let repo = InMemoryNoteRepository::seeded();
        let query = NoteListQuery::by_author(Some(String::new()));
        assert_eq!(query.author_id, None);
        assert_eq!(repo.list_notes(&query).len(), 2);
    }

    #[test]
    fn remove_missing_id_returns_none() {
        let mut repo = InMemoryNoteRepository::seeded();
        assert!(repo.remove_note("999").is_none());
        assert_eq!(repo.len(), 2);
    }
}
