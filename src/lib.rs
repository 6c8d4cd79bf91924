//! uphold-rs: async client for the Uphold REST API.
//!
//! One [`UpholdClient`] is one session: it holds the connection settings, the active
//! [`Credential`], a pending one-time passcode and the latest [`RateLimit`] snapshot.
//! Resources come back as opaque [`serde_json::Value`] documents, exactly as the
//! server sent them.
//!
//! ```no_run
//! # use uphold_rs::UpholdClient;
//! # use rust_decimal::Decimal;
//! # #[tokio::main]
//! # async fn main() -> Result<(), uphold_rs::UpholdError> {
//! let mut client = UpholdClient::builder().sandbox(true).build()?;
//! client.authenticate_with_token("my-personal-access-token");
//!
//! let quote = client
//!     .prepare_transaction("card-id", "foo@bar.com", Decimal::new(100, 2), "BTC")
//!     .await?;
//! let committed = client.execute_transaction("card-id", &quote, None, None).await?;
//! println!("{}", committed["status"]);
//! # Ok(())
//! # }
//! ```

pub mod core;

mod auth;
mod cards;
mod contacts;
mod me;
mod reserve;
mod ticker;
mod transactions;
mod vouchers;

pub use crate::core::{
    Credential, OAuthClient, RateLimit, UpholdClient, UpholdClientBuilder, UpholdError,
};

/// Install a `fmt` subscriber honoring `RUST_LOG`. Dev-only convenience for tests.
///
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
