//! Card transactions: the two-step quote/commit protocol plus cancel and resend.
//!
//! [`prepare_transaction`](UpholdClient::prepare_transaction) asks the server for a quote
//! and returns its id. The quote expires server-side after roughly 30 seconds; within
//! that window it can be committed with
//! [`execute_transaction`](UpholdClient::execute_transaction) or dropped with
//! [`cancel_transaction`](UpholdClient::cancel_transaction). The client does not track
//! quote state: committing an expired or already committed quote fails with whatever
//! the server answers.

mod wire;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::net::Body;
use crate::core::{UpholdClient, UpholdError};
use wire::{Commit, Prepared, Quote};

impl UpholdClient {
    /// Request a quote for sending `amount` `currency` from `card_id` to `destination`
    /// (`POST /me/cards/{card}/transactions`) and return the transaction id.
    ///
    /// `destination` may be an email address, a username or a crypto address. The amount
    /// is sent with its own scale, so `1.00` is sent as `"1.00"`.
    ///
    /// # Errors
    ///
    /// Returns [`UpholdError::Data`] if the server response carries no `id`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn prepare_transaction(
        &mut self,
        card_id: &str,
        destination: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<String, UpholdError> {
        let quote = Quote {
            destination,
            amount,
            currency,
        };
        let data = self
            .post(
                &format!("/me/cards/{card_id}/transactions"),
                Body::Form(quote.into_form()),
            )
            .await?;

        let prepared: Prepared = serde_json::from_value(data)
            .map_err(|e| UpholdError::Data(format!("unexpected transaction response: {e}")))?;
        prepared
            .id
            .ok_or_else(|| UpholdError::Data("id missing from transaction response".into()))
    }

    /// Commit a prepared transaction (`POST .../transactions/{id}/commit`). Irreversible
    /// once the server accepts it.
    ///
    /// `message` is attached only when present and non-empty. `signature` is a previously
    /// quoted rate signature; it is forwarded untouched as `sig` and never checked locally.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn execute_transaction(
        &mut self,
        card_id: &str,
        transaction_id: &str,
        message: Option<&str>,
        signature: Option<&str>,
    ) -> Result<Value, UpholdError> {
        let commit = Commit { message, signature };
        self.post(
            &format!("/me/cards/{card_id}/transactions/{transaction_id}/commit"),
            Body::Form(commit.into_form()),
        )
        .await
    }

    /// Cancel a transaction that has not been redeemed yet (`POST .../cancel`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn cancel_transaction(
        &mut self,
        card_id: &str,
        transaction_id: &str,
    ) -> Result<Value, UpholdError> {
        self.post(
            &format!("/me/cards/{card_id}/transactions/{transaction_id}/cancel"),
            Body::None,
        )
        .await
    }

    /// Send the recipient a reminder for a transaction that has not been redeemed yet
    /// (`POST .../resend`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn resend_transaction_notice(
        &mut self,
        card_id: &str,
        transaction_id: &str,
    ) -> Result<Value, UpholdError> {
        self.post(
            &format!("/me/cards/{card_id}/transactions/{transaction_id}/resend"),
            Body::None,
        )
        .await
    }
}
