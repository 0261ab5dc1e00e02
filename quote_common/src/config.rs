//! Runtime settings for the provider endpoints.
//!
//! Defaults point at the production APIs. Environment variables override them, which
//! is how mirrors and local test servers are wired in.
use std::env;

use log::debug;

use crate::net::{BTCTURK_TICKER_URL, DOVIZCOM_URL};

/// Overrides the gold/currency endpoint.
pub const DOVIZCOM_URL_ENV: &str = "FETCH_PRICE_DOVIZCOM_URL";
/// Overrides the crypto ticker endpoint base.
pub const BTCTURK_URL_ENV: &str = "FETCH_PRICE_BTCTURK_URL";

/// Endpoint configuration for both providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Full gold/currency endpoint.
    pub dovizcom_url: String,
    /// Ticker endpoint base, without the query string.
    pub btcturk_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dovizcom_url: DOVIZCOM_URL.to_string(),
            btcturk_url: BTCTURK_TICKER_URL.to_string(),
        }
    }
}

impl Settings {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().override_with(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Blank values are ignored.
    pub fn override_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = read(DOVIZCOM_URL_ENV) {
            debug!("{} overrides gold endpoint: {}", DOVIZCOM_URL_ENV, url);
            self.dovizcom_url = url;
        }
        if let Some(url) = read(BTCTURK_URL_ENV) {
            debug!("{} overrides ticker endpoint: {}", BTCTURK_URL_ENV, url);
            self.btcturk_url = url;
        }
        self
    }
}
