use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Request, RequestBuilder, Response};

use crate::api::exchange::{RequestSnapshot, ResponseSnapshot};
use crate::api::http_sender::HttpSender;
use crate::api::observer::ExchangeObserver;
use crate::api::Error;

// Thread-safe mock that captures requests for inspection
pub(super) struct MockSender {
    pub responses: Arc<Mutex<Vec<Result<Response, reqwest::Error>>>>,
    pub captured_requests: Arc<Mutex<Vec<Request>>>,
}

impl MockSender {
    pub fn new(responses: Vec<Result<Response, reqwest::Error>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_captured_requests(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        self.captured_requests.lock().unwrap()
    }
}

#[async_trait]
impl HttpSender for MockSender {
    async fn send(&self, request: RequestBuilder) -> Result<Response, reqwest::Error> {
        let built_request = request.build()?;
        self.captured_requests.lock().unwrap().push(built_request.try_clone().unwrap());

        self.responses.lock().unwrap().remove(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ObservedEvent {
    BeforeSend { operation: String, url: String, body: Option<String> },
    Success { operation: String, status: u16, body: String },
    Failure { operation: String, code: Option<u16> },
}

// Records observer hooks in call order
#[derive(Default)]
pub(super) struct RecordingObserver {
    pub events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ExchangeObserver for RecordingObserver {
    fn before_send(&self, operation: &str, request: &RequestSnapshot) {
        self.events.lock().unwrap().push(ObservedEvent::BeforeSend {
            operation: operation.to_string(),
            url: request.url.clone(),
            body: request.body.clone(),
        });
    }

    fn on_success(&self, operation: &str, _request: &RequestSnapshot, response: &ResponseSnapshot) {
        self.events.lock().unwrap().push(ObservedEvent::Success {
            operation: operation.to_string(),
            status: response.status.as_u16(),
            body: response.body.clone(),
        });
    }

    fn on_failure(&self, operation: &str, error: &Error) {
        self.events.lock().unwrap().push(ObservedEvent::Failure {
            operation: operation.to_string(),
            code: error.code(),
        });
    }
}
