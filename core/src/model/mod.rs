//! Records mirroring the Hetzner Cloud JSON schema.
//!
//! Every documented field is an `Option` so a missing or `null` value decodes
//! as unset, and unknown fields are ignored.

mod action;
mod common;
mod floating_ip;
mod pricing;
mod server;
mod server_type;


pub use action::{Action, ActionEnvelope, ActionList, ActionResource, ActionStatus};
pub use common::{Datacenter, DatacenterServerTypes, Location, Meta, Pagination, Price, Ptr};
pub use floating_ip::{FloatingIp, FloatingIpEnvelope, FloatingIpList, FloatingIpType};
pub use pricing::{
    FloatingIpPricing, ImagePricing, Pricing, PricingEnvelope, ServerBackupPricing,
    ServerTypePricing, TrafficPricing,
};
pub use server::{
    CreateServerRequest, CreateServerResponse, DeleteServerResponse, Image, ImageCreatedFrom, Ipv4,
    Ipv6, Iso, PublicNet, RenameServerRequest, RenameServerResponse, Server, ServerEnvelope,
    ServerList, ServerStatus,
};
pub use server_type::{ServerType, ServerTypeEnvelope, ServerTypeList, ServerTypePrice};
