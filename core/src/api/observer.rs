use log::debug;

use crate::api::Error;
use crate::api::exchange::{RequestSnapshot, ResponseSnapshot};

/// Hooks invoked by the client around every exchange. Purely observational.
///
/// `operation` is a short label such as `"get server"`; the identifier of the
/// resource is part of the request URL.
pub trait ExchangeObserver: Send + Sync {
    fn before_send(&self, _operation: &str, _request: &RequestSnapshot) {}

    fn on_success(&self, _operation: &str, _request: &RequestSnapshot, _response: &ResponseSnapshot) {}

    fn on_failure(&self, _operation: &str, _error: &Error) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExchangeObserver for NoopObserver {}

/// Forwards every hook to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ExchangeObserver for LogObserver {
    fn before_send(&self, operation: &str, request: &RequestSnapshot) {
        match &request.body {
            Some(body) => debug!("Sending API-Request to {operation}: {request} body={body}"),
            None => debug!("Sending API-Request to {operation}: {request}"),
        }
    }

    fn on_success(&self, operation: &str, request: &RequestSnapshot, response: &ResponseSnapshot) {
        debug!(
            "Response for {operation} request {request}: status={} body={}",
            response.status, response.body
        );
    }

    fn on_failure(&self, operation: &str, error: &Error) {
        match error.response() {
            Some(response) => debug!("API-Request to {operation} failed: {error} body={}", response.body),
            None => debug!("API-Request to {operation} failed: {error}"),
        }
    }
}
