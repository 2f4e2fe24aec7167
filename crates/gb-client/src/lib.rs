//! gb-client
//!
//! HTTP access to the GoBarber API and the credential channel that feeds its
//! `Authorization` header.

pub(crate) mod account_api;
pub(crate) mod client;
pub(crate) mod credential_channel;


pub use account_api::AccountApi;
pub use client::{ApiClient, ClientError, ClientResult};
pub use credential_channel::CredentialChannel;
