//! Resource boundary exposing the note store to callers.
//!
//! # Responsibility
//! - Translate named operations with JSON arguments into store calls.
//! - Keep wire envelopes out of the service layer.

pub mod note_resource;

pub use note_resource::{
    parse_note_uri, MethodDescriptor, NoteMethod, NoteResource, ParamDescriptor,
    ResourceDescriptor, ResourceError, ResourceResult, RESOURCE_NAME, URI_TEMPLATE,
};
