use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Action, Datacenter, Meta, Ptr, ServerType};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Server {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub status: Option<ServerStatus>,
    pub created: Option<String>,
    pub public_net: Option<PublicNet>,
    pub server_type: Option<ServerType>,
    pub datacenter: Option<Datacenter>,
    pub image: Option<Image>,
    pub iso: Option<Iso>,
    pub rescue_enabled: Option<bool>,
    pub locked: Option<bool>,
    pub backup_window: Option<String>,
    /// Bytes.
    pub outgoing_traffic: Option<u64>,
    pub ingoing_traffic: Option<u64>,
    pub included_traffic: Option<u64>,
    pub protection: Option<Value>,
    pub labels: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Running,
    Initializing,
    Starting,
    Stopping,
    Off,
    Deleting,
    Migrating,
    Rebuilding,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PublicNet {
    pub ipv4: Option<Ipv4>,
    pub ipv6: Option<Ipv6>,
    /// IDs of the floating IPs assigned to the server.
    pub floating_ips: Option<Vec<u64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ipv4 {
    pub ip: Option<String>,
    pub blocked: Option<bool>,
    pub dns_ptr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ipv6 {
    /// Network in CIDR notation.
    pub ip: Option<String>,
    pub blocked: Option<bool>,
    pub dns_ptr: Option<Vec<Ptr>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub status: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_size: Option<f64>,
    pub disk_size: Option<f64>,
    pub created: Option<String>,
    pub created_from: Option<ImageCreatedFrom>,
    pub bound_to: Option<u64>,
    pub os_flavor: Option<String>,
    pub os_version: Option<String>,
    pub rapid_deploy: Option<bool>,
    pub deprecated: Option<String>,
    pub protection: Option<Value>,
    pub labels: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageCreatedFrom {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Iso {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub iso_type: Option<String>,
    pub deprecated: Option<String>,
}

/// Response of `GET /servers`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerList {
    pub servers: Option<Vec<Server>>,
    pub meta: Option<Meta>,
}

/// Response of `GET /servers/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerEnvelope {
    pub server: Option<Server>,
}

/// Body of `POST /servers`.
///
/// `server_type` and `image` accept either a name or an ID in string form.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub server_type: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after_create: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
    /// Cloud-Init user data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

impl CreateServerRequest {
    pub fn new(name: &str, server_type: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            server_type: server_type.to_string(),
            image: image.to_string(),
            ..Default::default()
        }
    }
}

/// Response of `POST /servers`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateServerResponse {
    pub server: Option<Server>,
    pub action: Option<Action>,
    pub next_actions: Option<Vec<Action>>,
    /// Only set when no SSH key was given.
    pub root_password: Option<String>,
}

/// Response of `DELETE /servers/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteServerResponse {
    pub action: Option<Action>,
}

/// Body of `PUT /servers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenameServerRequest {
    pub name: String,
}

/// Response of `PUT /servers/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenameServerResponse {
    pub server: Option<Server>,
}
