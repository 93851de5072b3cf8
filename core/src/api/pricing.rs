use crate::api::Client;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::observer::ExchangeObserver;
use crate::model::PricingEnvelope;

#[async_trait::async_trait]
pub trait PricingApi {
    async fn get_pricing(&self) -> Result<PricingEnvelope, Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender, O: ExchangeObserver> PricingApi for Client<S, O> {
    async fn get_pricing(&self) -> Result<PricingEnvelope, Error> {
        self.send_get("get pricing", "pricing").await
    }
}
