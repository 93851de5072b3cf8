use serde::{Deserialize, Serialize};

use super::Meta;
use crate::api::ErrorObject;

/// Progress of an asynchronous operation started by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    pub id: Option<u64>,
    pub command: Option<String>,
    pub status: Option<ActionStatus>,
    /// Percentage between 0 and 100.
    pub progress: Option<u8>,
    pub started: Option<String>,
    pub finished: Option<String>,
    pub resources: Option<Vec<ActionResource>>,
    /// Set only when `status` is `error`.
    pub error: Option<ErrorObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Running,
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// A resource an action operates on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionResource {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

/// Response of `GET /actions`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionList {
    pub actions: Option<Vec<Action>>,
    pub meta: Option<Meta>,
}

/// Response of `GET /actions/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionEnvelope {
    pub action: Option<Action>,
}
