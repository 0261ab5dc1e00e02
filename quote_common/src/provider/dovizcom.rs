use log::debug;
use serde::Deserialize;

use crate::http::{HttpTransport, Transport};
use crate::net::DOVIZCOM_URL;
use crate::provider::{QuoteProvider, lenient_f64};
use crate::quote::{SuccessQuote, now_timestamp};
use crate::result::Result;

/// Provider name reported in `market`.
pub const MARKET: &str = "Dovizcom";
/// Display name of the only instrument the endpoint serves.
pub const NAME: &str = "Gram Altın";

/// Body of the gold/currency endpoint. Only the three price fields are read.
#[derive(Debug, Deserialize)]
struct DovizcomQuote {
    #[serde(default, deserialize_with = "lenient_f64")]
    selling: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    buying: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    change_rate: f64,
}

/// Gold/currency adapter.
///
/// The endpoint is pinned to one instrument, so the requested symbol is only echoed
/// back in the result and never reaches the URL.
pub struct Dovizcom<T: Transport = HttpTransport> {
    transport: T,
    url: String,
}

impl Dovizcom {
    /// Adapter against the production endpoint.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new(), DOVIZCOM_URL)
    }
}

impl Default for Dovizcom {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Dovizcom<T> {
    /// Adapter over an arbitrary transport and endpoint.
    pub fn with_transport(transport: T, url: &str) -> Self {
        Dovizcom {
            transport,
            url: url.to_string(),
        }
    }
}

impl<T: Transport> QuoteProvider for Dovizcom<T> {
    fn market(&self) -> &'static str {
        MARKET
    }

    fn fetch(&self, symbol: &str) -> Result<SuccessQuote> {
        let body = self.transport.get_text(&self.url)?;
        let data: DovizcomQuote = serde_json::from_str(&body)?;
        debug!("{} quote for {}: {:?}", MARKET, symbol, data);

        Ok(SuccessQuote {
            symbol: symbol.to_string(),
            name: NAME.to_string(),
            current_price: data.selling,
            previous_close: data.buying,
            change_percent: data.change_rate,
            market: MARKET.to_string(),
            timestamp: now_timestamp(),
        })
    }
}
