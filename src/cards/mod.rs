use serde_json::Value;

use crate::core::{UpholdClient, UpholdError};

impl UpholdClient {
    /// List the current user's cards (`GET /me/cards`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_cards(&mut self) -> Result<Value, UpholdError> {
        self.get("/me/cards").await
    }

    /// Fetch one card by id (`GET /me/cards/{id}`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_card(&mut self, card_id: &str) -> Result<Value, UpholdError> {
        self.get(&format!("/me/cards/{card_id}")).await
    }

    /// List the transactions of one card (`GET /me/cards/{id}/transactions`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_card_transactions(&mut self, card_id: &str) -> Result<Value, UpholdError> {
        self.get(&format!("/me/cards/{card_id}/transactions")).await
    }
}
