use serde::{Deserialize, Serialize};

use super::{Price, ServerTypePrice};

/// Response of `GET /pricing`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingEnvelope {
    pub pricing: Option<Pricing>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pricing {
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: Option<String>,
    pub vat_rate: Option<String>,
    pub image: Option<ImagePricing>,
    pub floating_ip: Option<FloatingIpPricing>,
    pub traffic: Option<TrafficPricing>,
    pub server_backup: Option<ServerBackupPricing>,
    pub server_types: Option<Vec<ServerTypePricing>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagePricing {
    pub price_per_gb_month: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingIpPricing {
    pub price_monthly: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrafficPricing {
    pub price_per_tb: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerBackupPricing {
    /// Surcharge on the server price, in percent.
    pub percentage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerTypePricing {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub prices: Option<Vec<ServerTypePrice>>,
}
