//! # HCloud Core
//!
//! Typed client for the Hetzner Cloud REST API. Each operation is a single
//! request/response exchange; failures of any kind surface as one [`Error`].

mod api;
pub mod model;

pub use api::{
    ActionsApi, Client, ClientConfig, DEFAULT_API_URL, DefaultSender, ENDPOINT_ENV, Error,
    ErrorObject, ErrorResponse, ExchangeObserver, FloatingIpsApi, HttpSender, LogObserver,
    NoopObserver, PricingApi, RequestSnapshot, ResponseSnapshot, ServerTypesApi, ServersApi,
    TOKEN_ENV, response_to_error,
};
