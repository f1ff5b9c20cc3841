//! JSON-lines request loop over the note resource.
//!
//! # Responsibility
//! - Decode one request per input line and encode one response per line.
//! - Route `describe` and `read` next to the resource's own methods.
//!
//! # Invariants
//! - Every non-blank input line yields exactly one output line.
//! - Malformed requests produce an error response; the loop keeps running.

use log::{debug, warn};
use pubnote_core::{NoteResource, ResourceError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, BufRead, Write};

const METHOD_DESCRIBE: &str = "describe";
const METHOD_READ: &str = "read";

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Deserialize)]
struct ReadParams {
    uri: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Success { id: Value, ok: bool, result: Value },
    Failure { id: Value, ok: bool, error: ErrorBody },
}

impl Response {
    fn success(id: Value, result: Value) -> Self {
        Self::Success {
            id,
            ok: true,
            result,
        }
    }

    fn failure(id: Value, kind: &'static str, message: impl Into<String>) -> Self {
        Self::Failure {
            id,
            ok: false,
            error: ErrorBody {
                kind,
                message: message.into(),
            },
        }
    }
}

/// Stdio host bound to one resource.
pub struct Host {
    resource: NoteResource,
}

impl Host {
    pub fn new(resource: NoteResource) -> Self {
        Self { resource }
    }

    /// Serves requests until `input` reaches EOF.
    pub fn serve(&self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            if let Some(response) = self.respond(&line?) {
                writeln!(output, "{response}")?;
                output.flush()?;
            }
        }
        debug!("event=host_eof module=host status=ok");
        Ok(())
    }

    /// Handles one input line; `None` for blank lines.
    pub fn respond(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Request>(trimmed) {
            Ok(request) => self.dispatch(request),
            Err(err) => {
                warn!("event=host_request module=host status=parse_error");
                Response::failure(Value::Null, "parse", err.to_string())
            }
        };

        Some(encode(&response))
    }

    fn dispatch(&self, request: Request) -> Response {
        let Request { id, method, params } = request;
        let outcome = match method.as_str() {
            METHOD_DESCRIBE => {
                serde_json::to_value(self.resource.descriptor()).map_err(ResourceError::from)
            }
            METHOD_READ => match serde_json::from_value::<ReadParams>(params) {
                Ok(args) => self.resource.read_uri(&args.uri),
                Err(err) => Err(ResourceError::InvalidParams {
                    method: METHOD_READ,
                    message: err.to_string(),
                }),
            },
            other => self.resource.handle(other, params),
        };

        match outcome {
            Ok(result) => Response::success(id, result),
            Err(err) => Response::failure(id, err.kind(), err.to_string()),
        }
    }
}

fn encode(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|err| {
        format!(
            r#"{{"id":null,"ok":false,"error":{{"kind":"encode","message":{}}}}}"#,
            Value::String(err.to_string())
        )
    })
}
