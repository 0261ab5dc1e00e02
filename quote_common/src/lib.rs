//! Quote lookup primitives shared by the `fetch_price` binary.
//!
//! This crate aggregates:
//! - `quote` — the `QuoteResult` record and its JSON encoding.
//! - `asset` — asset-type tags and their default symbols.
//! - `error` — unified error type `FetchError`.
//! - `result` — handy `Result<T, FetchError>` alias.
//! - `net` — provider endpoints and the request timeout.
//! - `config` — endpoint settings with environment overrides.
//! - `http` — the `Transport` seam and its reqwest implementation.
//! - `provider` — the Dovizcom and BtcTurk adapters.
//! - `dispatch` — routing from asset-type tag to adapter.
#![warn(missing_docs)]
pub mod asset;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod net;
pub mod provider;
pub mod quote;
pub mod result;

pub use config::Settings;
pub use dispatch::Dispatcher;
pub use error::FetchError;
pub use quote::QuoteResult;
pub use result::Result;
