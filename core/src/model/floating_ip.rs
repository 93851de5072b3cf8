use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Location, Meta, Ptr};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingIp {
    pub id: Option<u64>,
    pub description: Option<String>,
    pub ip: Option<String>,
    #[serde(rename = "type")]
    pub ip_type: Option<FloatingIpType>,
    /// ID of the server the IP is assigned to, unset when unassigned.
    pub server: Option<u64>,
    pub dns_ptr: Option<Vec<Ptr>>,
    /// Routing is optimized for this location.
    pub home_location: Option<Location>,
    pub blocked: Option<bool>,
    pub protection: Option<Value>,
    pub labels: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatingIpType {
    Ipv4,
    Ipv6,
    #[serde(other)]
    Unknown,
}

/// Response of `GET /floating_ips`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingIpList {
    pub floating_ips: Option<Vec<FloatingIp>>,
    pub meta: Option<Meta>,
}

/// Response of `GET /floating_ips/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingIpEnvelope {
    pub floating_ip: Option<FloatingIp>,
}
