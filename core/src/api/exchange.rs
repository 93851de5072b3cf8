use std::fmt;

use http::{HeaderMap, Method, StatusCode};
use reqwest::Response;

/// One logical operation described as plain data, before it is bound to the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ApiRequest {
    pub method: Method,
    /// Relative to the API root, e.g. `servers/42`.
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_json_body(method: Method, path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Owned copy of an outbound request, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl RequestSnapshot {
    pub(super) fn new(request: &ApiRequest, url: &str) -> Self {
        Self {
            method: request.method.clone(),
            url: url.to_string(),
            body: request
                .body
                .as_deref()
                .map(|body| String::from_utf8_lossy(body).into_owned()),
        }
    }
}

impl fmt::Display for RequestSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Owned copy of an inbound response, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ResponseSnapshot {
    /// Drains the response. A body that fails to arrive is an error for a 2xx
    /// status and is recorded as empty otherwise.
    pub(super) async fn read(response: Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e),
            Err(_) => String::new(),
        };
        Ok(Self {
            status,
            headers,
            body,
        })
    }
}
