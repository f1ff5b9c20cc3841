//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the note store operations.
//! - Keep the resource boundary decoupled from storage details.

pub mod note_service;
