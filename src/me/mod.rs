use serde_json::Value;

use crate::core::{UpholdClient, UpholdError};

impl UpholdClient {
    /// Fetch a summary of the current user (`GET /me`): profile data, cards, recent
    /// transactions and more.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_profile(&mut self) -> Result<Value, UpholdError> {
        self.get("/me").await
    }

    /// List the phone numbers of the current user (`GET /me/phones`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_phones(&mut self) -> Result<Value, UpholdError> {
        self.get("/me/phones").await
    }

    /// List every transaction of the current user (`GET /me/transactions`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_transactions(&mut self) -> Result<Value, UpholdError> {
        self.get("/me/transactions").await
    }
}
