//! Named-operation boundary for the note store.
//!
//! # Responsibility
//! - Map operation names and JSON arguments onto `NoteService` calls.
//! - Describe the resource (name, URI template, methods, arguments).
//! - Resolve `notes/{id}` URIs to single-note reads.
//!
//! # Invariants
//! - Argument types are checked here; unknown argument keys are ignored.
//! - Not-found stays a value (`null` / `{"success": false}`), never an error.
//! - No authorization: every method is public.

use crate::model::note::NewNote;
use crate::repo::note_repo::{InMemoryNoteRepository, NoteRepository};
use crate::search::text::NoteSearchQuery;
use crate::service::note_service::{NoteService, NoteServiceError};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Resource name advertised to callers.
pub const RESOURCE_NAME: &str = "note";
/// URI template for single-note reads.
pub const URI_TEMPLATE: &str = "notes/{id}";
const URI_SCHEME_PREFIX: &str = "note://";
const URI_PATH_PREFIX: &str = "notes/";

pub type ResourceResult<T = Value> = Result<T, ResourceError>;

/// Boundary error surfaced to resource callers.
#[derive(Debug)]
pub enum ResourceError {
    /// Method name is not one of the resource methods.
    UnknownMethod(String),
    /// Arguments do not match the method's declared shape.
    InvalidParams {
        method: &'static str,
        message: String,
    },
    /// URI does not match `notes/{id}`.
    InvalidUri(String),
    /// Store-level failure.
    Store(NoteServiceError),
    /// Result could not be encoded as JSON.
    Encode(serde_json::Error),
}

impl ResourceError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownMethod(_) => "unknown_method",
            Self::InvalidParams { .. } => "invalid_params",
            Self::InvalidUri(_) => "invalid_uri",
            Self::Store(_) => "store",
            Self::Encode(_) => "encode",
        }
    }
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod(name) => write!(f, "unknown method `{name}` for resource `note`"),
            Self::InvalidParams { method, message } => {
                write!(f, "invalid params for `{method}`: {message}")
            }
            Self::InvalidUri(uri) => {
                write!(f, "invalid note uri `{uri}`; expected `{URI_TEMPLATE}`")
            }
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode result: {err}"),
        }
    }
}

impl Error for ResourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NoteServiceError> for ResourceError {
    fn from(value: NoteServiceError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Operations exposed by the note resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteMethod {
    Get,
    List,
    Create,
    Delete,
    Search,
}

impl NoteMethod {
    /// All methods in advertised order.
    pub const ALL: [NoteMethod; 5] = [
        Self::Get,
        Self::List,
        Self::Create,
        Self::Delete,
        Self::Search,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Search => "search",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Get => "Get a note by ID (public access)",
            Self::List => "List all notes (public access) or filter by authorId",
            Self::Create => "Create a new note (public access)",
            Self::Delete => "Delete a note (public access)",
            Self::Search => "Search notes by content (public access)",
        }
    }

    pub fn params(self) -> &'static [ParamDescriptor] {
        match self {
            Self::Get | Self::Delete => ID_PARAMS,
            Self::List => LIST_PARAMS,
            Self::Create => CREATE_PARAMS,
            Self::Search => SEARCH_PARAMS,
        }
    }
}

/// One declared method argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

const ID_PARAMS: &[ParamDescriptor] = &[ParamDescriptor {
    name: "id",
    description: "Note ID",
    required: true,
}];
const LIST_PARAMS: &[ParamDescriptor] = &[ParamDescriptor {
    name: "authorId",
    description: "Filter notes by author ID",
    required: false,
}];
const CREATE_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor {
        name: "title",
        description: "Note title",
        required: false,
    },
    ParamDescriptor {
        name: "content",
        description: "Note content",
        required: false,
    },
    ParamDescriptor {
        name: "authorId",
        description: "Author ID (optional)",
        required: false,
    },
];
const SEARCH_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor {
        name: "query",
        description: "Search query",
        required: true,
    },
    ParamDescriptor {
        name: "authorId",
        description: "Filter by author ID",
        required: false,
    },
];

/// Method entry inside [`ResourceDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamDescriptor>,
}

/// Self-description of the note resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub uri_template: &'static str,
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Debug, Deserialize)]
struct IdParams {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    #[serde(default)]
    author_id: Option<String>,
}

/// Note resource bound to one shared store.
pub struct NoteResource<R: NoteRepository = InMemoryNoteRepository> {
    service: Arc<NoteService<R>>,
}

impl<R: NoteRepository> Clone for NoteResource<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<R: NoteRepository> NoteResource<R> {
    pub fn new(service: Arc<NoteService<R>>) -> Self {
        Self { service }
    }

    /// Shared store behind this resource.
    pub fn service(&self) -> &Arc<NoteService<R>> {
        &self.service
    }

    /// Describes name, URI template and methods.
    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            name: RESOURCE_NAME,
            uri_template: URI_TEMPLATE,
            methods: NoteMethod::ALL
                .into_iter()
                .map(|method| MethodDescriptor {
                    name: method.as_str(),
                    description: method.description(),
                    params: method.params().to_vec(),
                })
                .collect(),
        }
    }

    /// Invokes `method` with JSON `params` and returns the JSON result.
    ///
    /// `null` params are treated as an empty object.
    pub fn handle(&self, method: &str, params: Value) -> ResourceResult {
        let Some(parsed) = NoteMethod::parse(method) else {
            warn!("event=resource_call module=note_resource status=unknown_method");
            return Err(ResourceError::UnknownMethod(method.to_string()));
        };
        self.invoke(parsed, params)
    }

    /// Invokes a known method.
    pub fn invoke(&self, method: NoteMethod, params: Value) -> ResourceResult {
        match method {
            NoteMethod::Get => {
                let args: IdParams = decode_params(method, params)?;
                Ok(serde_json::to_value(self.service.get_note(&args.id)?)?)
            }
            NoteMethod::List => {
                let args: ListParams = decode_params(method, params)?;
                let notes = self.service.list_notes(args.author_id.as_deref())?;
                Ok(serde_json::to_value(notes)?)
            }
            NoteMethod::Create => {
                let args: NewNote = decode_params(method, params)?;
                Ok(serde_json::to_value(self.service.create_note(args)?)?)
            }
            NoteMethod::Delete => {
                let args: IdParams = decode_params(method, params)?;
                Ok(serde_json::to_value(self.service.delete_note(&args.id)?)?)
            }
            NoteMethod::Search => {
                let args: NoteSearchQuery = decode_params(method, params)?;
                Ok(serde_json::to_value(self.service.search_notes(&args)?)?)
            }
        }
    }

    /// Reads one note addressed as `notes/{id}` or `note://notes/{id}`.
    pub fn read_uri(&self, uri: &str) -> ResourceResult {
        let id = parse_note_uri(uri).ok_or_else(|| ResourceError::InvalidUri(uri.to_string()))?;
        Ok(serde_json::to_value(self.service.get_note(id)?)?)
    }
}

/// Extracts the id from `notes/{id}`, with an optional `note://` prefix.
pub fn parse_note_uri(uri: &str) -> Option<&str> {
    let trimmed = uri.trim();
    let path = trimmed.strip_prefix(URI_SCHEME_PREFIX).unwrap_or(trimmed);
    let id = path.strip_prefix(URI_PATH_PREFIX)?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id)
}

fn decode_params<T: DeserializeOwned>(method: NoteMethod, params: Value) -> ResourceResult<T> {
    let params = match params {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(params).map_err(|err| {
        warn!(
            "event=resource_call module=note_resource status=invalid_params method={}",
            method.as_str()
        );
        ResourceError::InvalidParams {
            method: method.as_str(),
            message: err.to_string(),
        }
    })
}
