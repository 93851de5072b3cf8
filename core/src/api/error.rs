use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::api::exchange::{RequestSnapshot, ResponseSnapshot};

/// Error payload reported by the API, e.g. `{"code": "not_found", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Body of a non-2xx response: `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorObject,
}

#[derive(Error, Debug)]
pub enum Error {
    /// No response was received.
    #[error("Request {request} failed: {message}")]
    Transport {
        request: Box<RequestSnapshot>,
        message: String,
        code: Option<u16>,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx status whose body is not an error envelope.
    #[error("API returned error status {} for {request}: {}", .response.status, .response.body)]
    UnexpectedStatus {
        request: Box<RequestSnapshot>,
        response: Box<ResponseSnapshot>,
    },

    /// Non-2xx status with a decodable error envelope.
    #[error("API returned error {} for {request}: {}", .error.code, .error.message)]
    ErrorResponse {
        request: Box<RequestSnapshot>,
        response: Box<ResponseSnapshot>,
        error: ErrorObject,
    },

    #[error("Failed to serialize request payload: {0}")]
    Serialization(serde_json::Error),

    /// A 2xx body did not match the expected envelope.
    #[error("Failed to deserialize response payload of {request}: {source}")]
    Deserialization {
        request: Box<RequestSnapshot>,
        response: Box<ResponseSnapshot>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(super) fn transport(request: RequestSnapshot, source: reqwest::Error) -> Self {
        Error::Transport {
            request: Box::new(request),
            message: source.to_string(),
            code: source.status().map(|status| status.as_u16()),
            source,
        }
    }

    /// The API's own message where one was parsed, otherwise the transport
    /// message or the rendered error.
    pub fn message(&self) -> String {
        match self {
            Error::Transport { message, .. } => message.clone(),
            Error::ErrorResponse { error, .. } => error.message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the response, or the status the transport reported.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Transport { code, .. } => *code,
            Error::UnexpectedStatus { response, .. }
            | Error::ErrorResponse { response, .. }
            | Error::Deserialization { response, .. } => Some(response.status.as_u16()),
            Error::Serialization(_) | Error::Configuration(_) => None,
        }
    }

    pub fn request(&self) -> Option<&RequestSnapshot> {
        match self {
            Error::Transport { request, .. }
            | Error::UnexpectedStatus { request, .. }
            | Error::ErrorResponse { request, .. }
            | Error::Deserialization { request, .. } => Some(request.as_ref()),
            Error::Serialization(_) | Error::Configuration(_) => None,
        }
    }

    pub fn response(&self) -> Option<&ResponseSnapshot> {
        match self {
            Error::UnexpectedStatus { response, .. }
            | Error::ErrorResponse { response, .. }
            | Error::Deserialization { response, .. } => Some(response.as_ref()),
            _ => None,
        }
    }

    pub fn parsed_error(&self) -> Option<&ErrorObject> {
        match self {
            Error::ErrorResponse { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Builds the error for a non-2xx response.
///
/// The body is decoded as an error envelope exactly once; a body that does not
/// decode yields `UnexpectedStatus` instead.
pub fn response_to_error(request: RequestSnapshot, response: ResponseSnapshot) -> Error {
    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(parsed) => Error::ErrorResponse {
            request: Box::new(request),
            response: Box::new(response),
            error: parsed.error,
        },
        Err(_) => Error::UnexpectedStatus {
            request: Box::new(request),
            response: Box::new(response),
        },
    }
}
