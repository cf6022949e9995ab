//! # Duo API Core
//!
//! Request signing and resilient invocation for the Duo REST APIs.
//!
//! ## Overview
//!
//! - **Canonical strings** for the V2 and V5 signature schemes
//! - **HMAC-SHA512 signing** of those strings into `Authorization` headers
//! - **Request building** for unsigned, form-signed and JSON-signed calls
//! - **Rate-limit retry** with exponential backoff and jitter
//! - **Cursor pagination** that merges every page of a listing
//! - **Admin operations** built on the above
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`admin`] | Admin/Accounts API operations |
//! | [`canonical`] | Canonical request strings |
//! | [`client`] | `DuoApi`: unsigned, V2 and V5 calls |
//! | [`config`] | Construction and per-call options |
//! | [`domain`] | Response models |
//! | [`error`] | Core error type |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`pagination`] | `Page` trait and page accumulation |
//! | [`params`] | Query/form and JSON parameter maps |
//! | [`request`] | Request assembly |
//! | [`retry`] | Rate-limit backoff |
//! | [`signer`] | Credentials and signatures |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use duoapi_core::{AdminClient, ClientConfig, DuoApi, Params};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = DuoApi::new(
//!         "DIXXXXXXXXXXXXXXXXXX",
//!         std::env::var("DUO_SKEY")?,
//!         "api-xxxxxxxx.duosecurity.com",
//!         "provisioning",
//!         ClientConfig::new().with_timeout(Duration::from_secs(10)),
//!     )?;
//!     let admin = AdminClient::new(api);
//!
//!     let users = admin.list_users(Params::new()).await?;
//!     println!("{} users", users.response.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  AdminClient    │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  DuoApi         │────▶│ retrieve_items   │ (listings)
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ RetryExecutor   │────▶│ HttpClient       │
//! │ (429 backoff)   │     │ (reqwest/custom) │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ RequestBuilder  │────▶│ Credentials      │
//! │                 │     │ (sign / sign_v5) │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Rate limiting is not an error. When backoff is exhausted the last 429
//! response is returned as a normal result:
//!
//! ```rust
//! use duoapi_core::DuoError;
//!
//! fn describe(error: &DuoError) -> &'static str {
//!     match error {
//!         DuoError::Construction(_) => "request could not be built",
//!         DuoError::ParameterType { .. } => "non-string query parameter",
//!         DuoError::Transport(_) => "network failure",
//!         DuoError::Encode(_) | DuoError::Decode(_) => "bad JSON",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The secret key never appears in `Debug` output or logs
//! - Certificate validation is on unless `ClientConfig::insecure` is set

pub mod admin;
pub mod canonical;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pagination;
pub mod params;
pub mod request;
pub mod retry;
pub mod signer;

pub use admin::AdminClient;

pub use client::{decode, DuoApi, DEFAULT_USER_AGENT};

pub use config::{CallOptions, ClientConfig, ProxyResolver, TransportHook};

pub use domain::{
    Account, DeleteAccountResult, GetAccountResult, Group, ListGroupsResult, ListUsersResult,
    Stat, StatResult, User,
};

pub use error::DuoError;

pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use pagination::{retrieve_items, ListResultMetadata, Page, DEFAULT_PAGE_LIMIT};

pub use params::{JsonParams, Params};

pub use request::RequestBuilder;

pub use retry::{BackoffState, RetryConfig, RetryExecutor, Sleeper, TokioSleeper};

pub use signer::Credentials;
