//! Vouchers. These exist in the sandbox only: in production every call fails with
//! [`UpholdError::NotSupportedInProduction`] before any request is made.

use serde_json::Value;

use crate::core::{UpholdClient, UpholdError};

impl UpholdClient {
    /// List the vouchers in the account (`GET /vouchers`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_vouchers(&mut self) -> Result<Value, UpholdError> {
        self.require_sandbox("list_vouchers")?;
        self.get("/vouchers").await
    }

    /// Fetch one voucher (`GET /vouchers/{id}`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_voucher(&mut self, voucher_id: &str) -> Result<Value, UpholdError> {
        self.require_sandbox("get_voucher")?;
        self.get(&format!("/vouchers/{voucher_id}")).await
    }

    /// Redeem a voucher (`GET /vouchers/{id}/redeem`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn redeem_voucher(&mut self, voucher_id: &str) -> Result<Value, UpholdError> {
        self.require_sandbox("redeem_voucher")?;
        self.get(&format!("/vouchers/{voucher_id}/redeem")).await
    }

    /// Revert a previously redeemed voucher (`GET /vouchers/{id}/revert`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn revert_voucher(&mut self, voucher_id: &str) -> Result<Value, UpholdError> {
        self.require_sandbox("revert_voucher")?;
        self.get(&format!("/vouchers/{voucher_id}/revert")).await
    }
}
