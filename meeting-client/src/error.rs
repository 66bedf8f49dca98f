//! Error types for the `meeting-client` crate.
//!
//! Follows the same pattern as the other workspace crates: a root `Error`
//! struct holding an error kind tree and an optional source for chaining.
//!
//! Two kinds matter most to callers and have deliberately different shapes:
//! - [`ErrorKind::Response`]: the server answered with a non-success status.
//!   The status, the body and a message derived from it are carried in a
//!   [`ResponseError`] and there is no source.
//! - [`ErrorKind::Transport`]: no response arrived at all. The original
//!   `reqwest::Error` is kept untouched as the source and can be recovered
//!   with [`Error::transport_error`].

use std::error::Error as StdError;
use std::fmt;

/// Fallback message when an error body carries neither `error` nor `message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Top-level error type for meeting-client.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in meeting-client.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Config(ConfigErrorKind),
    InvalidInput(InvalidInputKind),
    Response(ResponseError),
    Transport(TransportErrorKind),
    Decode,
}

/// Errors raised while validating configuration, before any request is sent.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    MissingApiKey,
    MissingBaseUrl,
    MissingPlatformKey,
    MissingField(&'static str),
    InvalidHeader,
    ClientBuild,
}

/// Errors raised for caller input that cannot be sent as-is.
#[derive(Debug, PartialEq)]
pub enum InvalidInputKind {
    ScheduledAt,
}

/// Ways a request can fail without the server answering.
#[derive(Debug, PartialEq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Request,
}

/// A non-success answer from the meeting API.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseError {
    pub status: u16,
    /// Response body as JSON. Bodies that are not JSON are kept as a string.
    pub body: serde_json::Value,
    pub message: String,
}

impl ResponseError {
    /// Builds a response error from a status and the raw body text.
    pub fn from_body(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text)
            .unwrap_or_else(|_| serde_json::Value::String(text.to_string()));
        let message = message_from_body(&body);

        Self {
            status,
            body,
            message,
        }
    }
}

fn message_from_body(body: &serde_json::Value) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|field| body.get(field).and_then(|value| value.as_str()))
        .find(|message| !message.is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string()
}

impl Error {
    /// HTTP status of a server error response.
    pub fn status(&self) -> Option<u16> {
        match &self.error_kind {
            ErrorKind::Response(response) => Some(response.status),
            _ => None,
        }
    }

    /// Body of a server error response.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match &self.error_kind {
            ErrorKind::Response(response) => Some(&response.body),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.error_kind, ErrorKind::Transport(_))
    }

    /// The underlying `reqwest::Error` when no response was received.
    pub fn transport_error(&self) -> Option<&reqwest::Error> {
        if !self.is_transport() {
            return None;
        }
        self.source
            .as_ref()
            .and_then(|source| source.downcast_ref::<reqwest::Error>())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Config(kind) => write!(f, "Configuration error: {:?}", kind),
            ErrorKind::InvalidInput(kind) => write!(f, "Invalid input: {:?}", kind),
            ErrorKind::Response(response) => {
                write!(f, "{} (HTTP {})", response.message, response.status)
            }
            ErrorKind::Transport(kind) => match &self.source {
                Some(source) => write!(f, "Transport error ({:?}): {}", kind, source),
                None => write!(f, "Transport error: {:?}", kind),
            },
            ErrorKind::Decode => write!(f, "Failed to decode response body"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors building the reqwest::Client happen before any network call.
        let error_kind = if err.is_builder() {
            ErrorKind::Config(ConfigErrorKind::ClientBuild)
        } else if err.is_decode() {
            ErrorKind::Decode
        } else if err.is_timeout() {
            ErrorKind::Transport(TransportErrorKind::Timeout)
        } else if err.is_connect() {
            ErrorKind::Transport(TransportErrorKind::Connect)
        } else {
            ErrorKind::Transport(TransportErrorKind::Request)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<ResponseError> for Error {
    fn from(response: ResponseError) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Response(response),
        }
    }
}

/// Helper function to create configuration errors.
pub fn config_error(kind: ConfigErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(kind),
    }
}

/// Helper function to create invalid input errors.
pub fn invalid_input_error(kind: InvalidInputKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::InvalidInput(kind),
    }
}

/// Helper function to create decode errors from serde failures.
pub fn decode_error(err: serde_json::Error) -> Error {
    Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::Decode,
    }
}
