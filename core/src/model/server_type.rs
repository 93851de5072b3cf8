use serde::{Deserialize, Serialize};

use super::{Meta, Price};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerType {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cores: Option<u32>,
    /// Gigabytes.
    pub memory: Option<f64>,
    /// Gigabytes.
    pub disk: Option<u64>,
    pub prices: Option<Vec<ServerTypePrice>>,
    pub storage_type: Option<String>,
    pub cpu_type: Option<String>,
    pub deprecated: Option<bool>,
}

/// Price of a server type in one location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerTypePrice {
    /// Location name.
    pub location: Option<String>,
    pub price_hourly: Option<Price>,
    pub price_monthly: Option<Price>,
}

/// Response of `GET /server_types`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerTypeList {
    pub server_types: Option<Vec<ServerType>>,
    pub meta: Option<Meta>,
}

/// Response of `GET /server_types/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerTypeEnvelope {
    pub server_type: Option<ServerType>,
}
