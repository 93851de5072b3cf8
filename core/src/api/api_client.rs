use http::Method;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::Error;
use crate::api::config::ClientConfig;
use crate::api::error::response_to_error;
use crate::api::exchange::{ApiRequest, RequestSnapshot, ResponseSnapshot};
use crate::api::http_sender::{DefaultSender, HttpSender};
use crate::api::observer::{ExchangeObserver, LogObserver};

/// Client for the Hetzner Cloud API.
///
/// Holds only immutable configuration; every call is one independent exchange,
/// so a client can be shared between tasks as long as its sender can.
pub struct Client<S: HttpSender = DefaultSender, O: ExchangeObserver = LogObserver> {
    pub(super) client: reqwest::Client,
    pub(super) sender: S,
    pub(super) observer: O,
    pub(super) api_url: String,
    pub(super) api_token: String,
}

impl Client<DefaultSender, LogObserver> {
    pub fn new(config: ClientConfig) -> Client<DefaultSender, LogObserver> {
        Self::with_dependencies(config, DefaultSender, LogObserver)
    }
}

impl<S: HttpSender, O: ExchangeObserver> Client<S, O> {
    pub fn with_dependencies(config: ClientConfig, sender: S, observer: O) -> Client<S, O> {
        Self {
            client: reqwest::Client::new(),
            sender,
            observer,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_token: config.api_token,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(super) fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    pub(super) async fn send_get<T: DeserializeOwned>(&self, operation: &str, path: &str) -> Result<T, Error> {
        self.dispatch(operation, ApiRequest::new(Method::GET, path)).await
    }

    pub(super) async fn send_delete<T: DeserializeOwned>(&self, operation: &str, path: &str) -> Result<T, Error> {
        self.dispatch(operation, ApiRequest::new(Method::DELETE, path)).await
    }

    pub(super) async fn send_json<P, T>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<T, Error>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = match serde_json::to_vec(payload) {
            Ok(body) => body,
            Err(e) => {
                let error = Error::Serialization(e);
                self.observer.on_failure(operation, &error);
                return Err(error);
            }
        };
        self.dispatch(operation, ApiRequest::with_json_body(method, path, body)).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, operation: &str, request: ApiRequest) -> Result<T, Error> {
        let result = self.execute(operation, request).await;
        if let Err(error) = &result {
            self.observer.on_failure(operation, error);
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, operation: &str, request: ApiRequest) -> Result<T, Error> {
        let url = self.url_for(&request.path);
        let snapshot = RequestSnapshot::new(&request, &url);
        self.observer.before_send(operation, &snapshot);

        let response = match self.sender.send(self.build_request(&url, request)).await {
            Ok(response) => response,
            Err(source) => return Err(Error::transport(snapshot, source)),
        };
        let response = match ResponseSnapshot::read(response).await {
            Ok(response) => response,
            Err(source) => return Err(Error::transport(snapshot, source)),
        };

        if !response.status.is_success() {
            return Err(response_to_error(snapshot, response));
        }

        match decode_body(&response.body) {
            Ok(decoded) => {
                self.observer.on_success(operation, &snapshot, &response);
                Ok(decoded)
            }
            Err(source) => Err(Error::Deserialization {
                request: Box::new(snapshot),
                response: Box::new(response),
                source,
            }),
        }
    }

    pub(super) fn build_request(&self, url: &str, request: ApiRequest) -> RequestBuilder {
        let builder = self
            .client
            .request(request.method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token));

        match request.body {
            Some(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            None => builder,
        }
    }
}

/// Decodes a 2xx body into the operation's envelope. An empty body decodes as `{}`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body)
}
