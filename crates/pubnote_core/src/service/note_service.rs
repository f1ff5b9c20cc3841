//! Note store use-case service.
//!
//! # Responsibility
//! - Provide the five note operations: get, list, create, delete, search.
//! - Resolve create-time defaults and stamp creation time.
//! - Serialize all access to the repository behind one exclusive lock.
//!
//! # Invariants
//! - Id allocation and collection mutation happen under the same lock.
//! - Missing ids are reported through return values, never as errors.
//! - Log lines carry metadata only (ids, authors, counts), never note text.

use crate::model::note::{NewNote, Note};
use crate::repo::note_repo::{InMemoryNoteRepository, NoteListQuery, NoteRepository, RepoError};
use crate::search::text::{filter_notes, NoteSearchQuery};
use chrono::Utc;
use log::{debug, error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// A previous lock holder panicked; the collection may be half-updated.
    LockPoisoned,
    /// Repository integrity failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned => write!(f, "note store lock poisoned"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LockPoisoned => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result envelope for delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    /// `true` when a note was removed, `false` when the id was unknown.
    pub success: bool,
}

/// Note store facade over a repository implementation.
pub struct NoteService<R: NoteRepository = InMemoryNoteRepository> {
    repo: Mutex<R>,
}

impl NoteService<InMemoryNoteRepository> {
    /// Creates an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryNoteRepository::new())
    }

    /// Creates an in-memory store holding the welcome notes.
    pub fn seeded() -> Self {
        Self::new(InMemoryNoteRepository::seeded())
    }
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Mutex::new(repo),
        }
    }

    /// Gets one note by id; `None` when no live note has it.
    pub fn get_note(&self, id: &str) -> NoteServiceResult<Option<Note>> {
        let note = self.lock()?.get_note(id);
        debug!(
            "event=note_get module=note_service status={} id={}",
            if note.is_some() { "ok" } else { "not_found" },
            id
        );
        Ok(note)
    }

    /// Lists notes in creation order, optionally restricted to one author.
    pub fn list_notes(&self, author_id: Option<&str>) -> NoteServiceResult<Vec<Note>> {
        let query = NoteListQuery::by_author(author_id.map(str::to_string));
        let notes = self.lock()?.list_notes(&query);
        debug!(
            "event=note_list module=note_service status=ok author_id={} count={}",
            author_id.unwrap_or("-"),
            notes.len()
        );
        Ok(notes)
    }

    /// Creates one note and appends it to the store.
    pub fn create_note(&self, input: NewNote) -> NoteServiceResult<Note> {
        let draft = input.into_draft(Utc::now());
        let note = self.lock()?.insert_note(draft).map_err(|err| {
            error!("event=note_create module=note_service status=error error={err}");
            NoteServiceError::from(err)
        })?;
        info!(
            "event=note_create module=note_service status=ok id={} author_id={}",
            note.id,
            note.author_id.as_deref().unwrap_or("-")
        );
        Ok(note)
    }

    /// Deletes one note by id.
    ///
    /// An unknown id is not an error; it reports `success = false`.
    pub fn delete_note(&self, id: &str) -> NoteServiceResult<DeleteOutcome> {
        let removed = self.lock()?.remove_note(id);
        let success = removed.is_some();
        info!(
            "event=note_delete module=note_service status={} id={}",
            if success { "ok" } else { "not_found" },
            id
        );
        Ok(DeleteOutcome { success })
    }

    /// Case-insensitive title/content search, optionally within one author.
    pub fn search_notes(&self, query: &NoteSearchQuery) -> NoteServiceResult<Vec<Note>> {
        let candidates = self.lock()?.list_notes(&query.candidates());
        let hits = filter_notes(candidates, query);
        debug!(
            "event=note_search module=note_service status=ok author_id={} query_chars={} hits={}",
            query.author_id.as_deref().unwrap_or("-"),
            query.query.chars().count(),
            hits.len()
        );
        Ok(hits)
    }

    /// Number of live notes.
    pub fn note_count(&self) -> NoteServiceResult<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> NoteServiceResult<MutexGuard<'_, R>> {
        self.repo.lock().map_err(|_| {
            error!("event=store_lock module=note_service status=poisoned");
            NoteServiceError::LockPoisoned
        })
    }
}
