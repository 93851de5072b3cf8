use std::fmt;

use serde::Deserialize;

use crate::api::Error;

pub const DEFAULT_API_URL: &str = "https://api.hetzner.cloud/v1";

pub const TOKEN_ENV: &str = "HCLOUD_TOKEN";
pub const ENDPOINT_ENV: &str = "HCLOUD_ENDPOINT";

/// Immutable settings a `Client` holds for its lifetime.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub api_token: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    pub fn new(api_token: &str) -> Self {
        Self {
            api_url: default_api_url(),
            api_token: api_token.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    /// Reads `HCLOUD_TOKEN` and, if set, `HCLOUD_ENDPOINT`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(super) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(TOKEN_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Configuration(format!("{TOKEN_ENV} is not set")))?;

        let config = Self::new(&api_token);
        Ok(match lookup(ENDPOINT_ENV).filter(|url| !url.trim().is_empty()) {
            Some(api_url) => config.with_api_url(&api_url),
            None => config,
        })
    }
}

// The token never ends up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
