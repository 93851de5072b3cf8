use crate::api::Client;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::observer::ExchangeObserver;
use crate::model::{ServerTypeEnvelope, ServerTypeList};

#[async_trait::async_trait]
pub trait ServerTypesApi {
    async fn get_server_types(&self) -> Result<ServerTypeList, Error>;
    async fn get_server_type(&self, id: u64) -> Result<ServerTypeEnvelope, Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender, O: ExchangeObserver> ServerTypesApi for Client<S, O> {
    async fn get_server_types(&self) -> Result<ServerTypeList, Error> {
        self.send_get("get all server types", "server_types").await
    }

    async fn get_server_type(&self, id: u64) -> Result<ServerTypeEnvelope, Error> {
        self.send_get("get a server type", &format!("server_types/{id}")).await
    }
}
