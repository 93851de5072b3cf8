use http::Method;

use crate::api::Client;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::observer::ExchangeObserver;
use crate::model::{
    CreateServerRequest, CreateServerResponse, DeleteServerResponse, RenameServerRequest,
    RenameServerResponse, ServerEnvelope, ServerList,
};

/// Server lifecycle operations.
#[async_trait::async_trait]
pub trait ServersApi {
    async fn get_servers(&self) -> Result<ServerList, Error>;
    async fn get_server(&self, id: u64) -> Result<ServerEnvelope, Error>;
    async fn create_server(&self, request: &CreateServerRequest) -> Result<CreateServerResponse, Error>;
    async fn delete_server(&self, id: u64) -> Result<DeleteServerResponse, Error>;
    /// Changes only the name; an empty name is passed through to the API as is.
    async fn rename_server(&self, id: u64, name: &str) -> Result<RenameServerResponse, Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender, O: ExchangeObserver> ServersApi for Client<S, O> {
    async fn get_servers(&self) -> Result<ServerList, Error> {
        self.send_get("get all servers", "servers").await
    }

    async fn get_server(&self, id: u64) -> Result<ServerEnvelope, Error> {
        self.send_get("get a single server", &format!("servers/{id}")).await
    }

    async fn create_server(&self, request: &CreateServerRequest) -> Result<CreateServerResponse, Error> {
        self.send_json("create a server", Method::POST, "servers", request).await
    }

    async fn delete_server(&self, id: u64) -> Result<DeleteServerResponse, Error> {
        self.send_delete("delete a server", &format!("servers/{id}")).await
    }

    async fn rename_server(&self, id: u64, name: &str) -> Result<RenameServerResponse, Error> {
        let payload = RenameServerRequest { name: name.to_string() };
        self.send_json("rename a server", Method::PUT, &format!("servers/{id}"), &payload).await
    }
}
