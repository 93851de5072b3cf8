use crate::api::Client;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::observer::ExchangeObserver;
use crate::model::{FloatingIpEnvelope, FloatingIpList};

#[async_trait::async_trait]
pub trait FloatingIpsApi {
    async fn get_floating_ips(&self) -> Result<FloatingIpList, Error>;
    async fn get_floating_ip(&self, id: u64) -> Result<FloatingIpEnvelope, Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender, O: ExchangeObserver> FloatingIpsApi for Client<S, O> {
    async fn get_floating_ips(&self) -> Result<FloatingIpList, Error> {
        self.send_get("get all floating ips", "floating_ips").await
    }

    async fn get_floating_ip(&self, id: u64) -> Result<FloatingIpEnvelope, Error> {
        self.send_get("get a single floating ip", &format!("floating_ips/{id}")).await
    }
}
