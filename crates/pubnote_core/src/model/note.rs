//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record exposed to store and resource callers.
//! - Resolve create-time defaults (`title`, `content`, `authorId`).
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another note.
//! - A note is immutable after creation; only deletion removes it.
//! - Wire names are camelCase (`authorId`, `createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for one note, in decimal string form.
pub type NoteId = String;

/// Title used when create input omits one or passes an empty string.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Author used when create input omits one or passes an empty string.
pub const DEFAULT_AUTHOR_ID: &str = "anonymous";

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Always `Some` for notes created through the store; optional on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Returns whether this note belongs to `author_id`.
    pub fn is_authored_by(&self, author_id: &str) -> bool {
        self.author_id.as_deref() == Some(author_id)
    }
}

/// Caller-supplied fields for note creation.
///
/// Every field is optional; see [`NewNote::into_draft`] for defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author_id: None,
        }
    }

    pub fn with_author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Resolves defaults and stamps the creation time.
    ///
    /// # Invariants
    /// - Empty `title` falls back to [`DEFAULT_TITLE`].
    /// - Empty `authorId` falls back to [`DEFAULT_AUTHOR_ID`].
    /// - Missing `content` becomes the empty string.
    pub fn into_draft(self, created_at: DateTime<Utc>) -> NoteDraft {
        NoteDraft {
            title: non_empty_or(self.title, DEFAULT_TITLE),
            content: self.content.unwrap_or_default(),
            author_id: non_empty_or(self.author_id, DEFAULT_AUTHOR_ID),
            created_at,
        }
    }
}

/// Fully-resolved note fields waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl NoteDraft {
    /// Binds the draft to a store-assigned id.
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            author_id: Some(self.author_id),
            created_at: self.created_at,
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}
