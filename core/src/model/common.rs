use serde::{Deserialize, Serialize};

/// Metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
    pub last_page: Option<u64>,
    pub total_entries: Option<u64>,
}

/// A price as returned by the API. Amounts are decimal strings, e.g. `"2.9600000000"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    pub net: Option<String>,
    pub gross: Option<String>,
}

/// Reverse DNS entry for a single address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ptr {
    pub ip: Option<String>,
    pub dns_ptr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub network_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Datacenter {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub server_types: Option<DatacenterServerTypes>,
}

/// Server type IDs offered by a datacenter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatacenterServerTypes {
    pub supported: Option<Vec<u64>>,
    pub available: Option<Vec<u64>>,
}
