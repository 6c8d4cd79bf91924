//! Public reserve data: status, statistics, the ledger and the anonymized transaction chain.
//!
//! None of these need a credential, but the session's credential is still sent when set.

use serde_json::Value;

use crate::core::{UpholdClient, UpholdError};

impl UpholdClient {
    /// Fetch the reserve overview (`GET /reserve`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_reserve_status(&mut self) -> Result<Value, UpholdError> {
        self.get("/reserve").await
    }

    /// Fetch reserve statistics (`GET /reserve/statistics`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_reserve_statistics(&mut self) -> Result<Value, UpholdError> {
        self.get("/reserve/statistics").await
    }

    /// Fetch the reserve ledger (`GET /reserve/ledger`). Each entry records a change in
    /// the reserve's assets or liabilities.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_reserve_ledger(&mut self) -> Result<Value, UpholdError> {
        self.get("/reserve/ledger").await
    }

    /// Fetch the public, anonymized transaction chain (`GET /reserve/transactions`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_public_transaction_chain(&mut self) -> Result<Value, UpholdError> {
        self.get("/reserve/transactions").await
    }

    /// Fetch one public transaction (`GET /reserve/transactions/{id}`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_public_transaction(
        &mut self,
        transaction_id: &str,
    ) -> Result<Value, UpholdError> {
        self.get(&format!("/reserve/transactions/{transaction_id}"))
            .await
    }
}
