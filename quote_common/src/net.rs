//! Provider endpoints and transport constants.
use std::time::Duration;

/// Gold/currency quote endpoint. Pinned to a single instrument.
pub const DOVIZCOM_URL: &str = "https://api.doviz.com/v12/gram-altin";
/// Crypto ticker endpoint; the pair symbol goes into the `pairSymbol` query parameter.
pub const BTCTURK_TICKER_URL: &str = "https://api.btcturk.com/api/v2/ticker";
/// Upper bound for a whole request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the ticker URL for `symbol`. The symbol is inserted verbatim.
pub fn ticker_url(base: &str, symbol: &str) -> String {
    format!("{}?pairSymbol={}", base, symbol)
}
