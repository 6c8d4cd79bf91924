//! Core components of the `uphold-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`UpholdClient`] and its builder.
//! - The primary [`UpholdError`] type.
//! - Session state: the active [`Credential`] and the last [`RateLimit`] snapshot.
//! - Internal request construction and transport.

/// The main client (`UpholdClient`), builder, credentials and rate-limit snapshot.
pub mod client;
/// The primary error type (`UpholdError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::UpholdClient`
pub use client::{Credential, OAuthClient, RateLimit, UpholdClient, UpholdClientBuilder};
pub use error::UpholdError;
