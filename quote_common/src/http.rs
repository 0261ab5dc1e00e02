//! HTTP transport used by the providers.
//!
//! Adapters talk to the network only through the `Transport` trait, so their field
//! mapping can be exercised with canned bodies. `HttpTransport` is the real thing: a
//! blocking reqwest client built for a single GET and dropped right after it.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::net::REQUEST_TIMEOUT;
use crate::result::Result;

/// Fetches a URL and hands back the response body.
pub trait Transport {
    /// Perform one GET. Non-2xx statuses are errors.
    fn get_text(&self, url: &str) -> Result<String>;
}

/// Blocking reqwest transport with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        HttpTransport {
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl HttpTransport {
    /// Transport using the standard request timeout.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(timeout: Duration) -> Self {
        HttpTransport { timeout }
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        let client = Client::builder().timeout(self.timeout).build()?;

        debug!("GET {}", url);
        let response = client.get(url).send()?;
        debug!("{} answered {}", url, response.status());

        Ok(response.error_for_status()?.text()?)
    }
}
