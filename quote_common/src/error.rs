//! Error types shared by the providers, the dispatcher and the CLI.
//!
//! The `FetchError` enum unifies transport, decoding and lookup failures so that
//! adapters can use `?` internally and collapse the outcome into a single
//! `QuoteResult` at their boundary. The `Display` text of each variant is what ends
//! up in the `error` field of a failure quote.
use thiserror::Error;

/// Unified error type for the quote fetcher.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout, non-2xx status or body read failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The provider answered with a body that is not the expected JSON.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// A numeric field arrived in a shape that cannot be read as a number.
    #[error("could not convert {0} to float")]
    InvalidNumber(String),

    /// The crypto provider returned an empty ticker collection.
    #[error("No data")]
    NoData,

    /// Fewer positional arguments than the CLI requires.
    #[error("{0}")]
    Usage(String),

    /// The asset-type tag does not map to any provider.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),
}
