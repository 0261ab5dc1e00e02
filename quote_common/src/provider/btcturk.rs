use log::debug;
use serde::Deserialize;

use crate::error::FetchError;
use crate::http::{HttpTransport, Transport};
use crate::net::{BTCTURK_TICKER_URL, ticker_url};
use crate::provider::{QuoteProvider, lenient_f64};
use crate::quote::{SuccessQuote, now_timestamp};
use crate::result::Result;

/// Provider name reported in `market`.
pub const MARKET: &str = "BtcTurk";
/// Quote currency whose suffix gets separated in display names.
const QUOTE_CURRENCY: &str = "TRY";

#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default)]
    data: Option<Vec<Ticker>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker {
    #[serde(default, deserialize_with = "lenient_f64")]
    last: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    open: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    daily_change_percent: f64,
}

/// Crypto ticker adapter. The pair symbol is passed to the endpoint as is.
pub struct BtcTurk<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl BtcTurk {
    /// Adapter against the production endpoint.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new(), BTCTURK_TICKER_URL)
    }
}

impl Default for BtcTurk {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> BtcTurk<T> {
    /// Adapter over an arbitrary transport and endpoint base.
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        BtcTurk {
            transport,
            base_url: base_url.to_string(),
        }
    }
}

impl<T: Transport> QuoteProvider for BtcTurk<T> {
    fn market(&self) -> &'static str {
        MARKET
    }

    fn fetch(&self, symbol: &str) -> Result<SuccessQuote> {
        let body = self
            .transport
            .get_text(&ticker_url(&self.base_url, symbol))?;
        let response: TickerResponse = serde_json::from_str(&body)?;

        let ticker = response
            .data
            .and_then(|rows| rows.into_iter().next())
            .ok_or(FetchError::NoData)?;
        debug!("{} ticker for {}: {:?}", MARKET, symbol, ticker);

        Ok(SuccessQuote {
            symbol: symbol.to_string(),
            name: display_name(symbol),
            current_price: ticker.last,
            previous_close: ticker.open,
            change_percent: ticker.daily_change_percent,
            market: MARKET.to_string(),
            timestamp: now_timestamp(),
        })
    }
}

/// `BTCTRY` becomes `BTC TRY`; symbols without the suffix are returned unchanged.
pub fn display_name(symbol: &str) -> String {
    match symbol.strip_suffix(QUOTE_CURRENCY) {
        Some(base) => format!("{} {}", base, QUOTE_CURRENCY),
        None => symbol.to_string(),
    }
}
