//! Core domain logic for PubNote.
//! This crate is the single source of truth for note store invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod resource;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::note::{NewNote, Note, NoteDraft, NoteId, DEFAULT_AUTHOR_ID, DEFAULT_TITLE};
pub use repo::note_repo::{
    welcome_notes, InMemoryNoteRepository, NoteListQuery, NoteRepository, RepoError, RepoResult,
    WELCOME_AUTHOR_ID,
};
pub use resource::{NoteMethod, NoteResource, ResourceDescriptor, ResourceError, ResourceResult};
pub use search::text::NoteSearchQuery;
pub use service::note_service::{DeleteOutcome, NoteService, NoteServiceError, NoteServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
