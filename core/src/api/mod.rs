//! Hetzner Cloud API operations and the machinery behind them

mod actions;
mod api_client;
mod config;
mod error;
mod exchange;
mod floating_ips;
mod http_sender;
mod observer;
mod pricing;
mod server_types;
mod servers;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod mock_sender;

pub use actions::ActionsApi;
pub use api_client::Client;
pub use config::{ClientConfig, DEFAULT_API_URL, ENDPOINT_ENV, TOKEN_ENV};
pub use error::{Error, ErrorObject, ErrorResponse, response_to_error};
pub use exchange::{RequestSnapshot, ResponseSnapshot};
pub use floating_ips::FloatingIpsApi;
pub use http_sender::{DefaultSender, HttpSender};
pub use observer::{ExchangeObserver, LogObserver, NoopObserver};
pub use pricing::PricingApi;
pub use server_types::ServerTypesApi;
pub use servers::ServersApi;
