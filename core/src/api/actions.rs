use crate::api::Client;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::observer::ExchangeObserver;
use crate::model::{ActionEnvelope, ActionList};

/// Read access to actions.
#[async_trait::async_trait]
pub trait ActionsApi {
    async fn get_actions(&self) -> Result<ActionList, Error>;
    async fn get_action(&self, id: u64) -> Result<ActionEnvelope, Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender, O: ExchangeObserver> ActionsApi for Client<S, O> {
    async fn get_actions(&self) -> Result<ActionList, Error> {
        self.send_get("get all actions", "actions").await
    }

    async fn get_action(&self, id: u64) -> Result<ActionEnvelope, Error> {
        self.send_get("get a single action", &format!("actions/{id}")).await
    }
}
