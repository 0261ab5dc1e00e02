//! Provider adapters.
//!
//! Each adapter turns one upstream JSON shape into a `SuccessQuote`. `fetch` may fail
//! with any `FetchError`; `quote` is the boundary operation that never fails and always
//! yields a `QuoteResult`.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FetchError;
use crate::quote::{QuoteResult, SuccessQuote};
use crate::result::Result;

/// Gold/currency quotes from doviz.com
pub mod dovizcom;
/// Crypto tickers from BtcTurk
pub mod btcturk;

pub use btcturk::BtcTurk;
pub use dovizcom::Dovizcom;

/// A single upstream quote source.
pub trait QuoteProvider {
    /// Provider name reported in the `market` field.
    fn market(&self) -> &'static str;

    /// Request and map one quote.
    fn fetch(&self, symbol: &str) -> Result<SuccessQuote>;

    /// Like `fetch`, but every failure is folded into the result.
    fn quote(&self, symbol: &str) -> QuoteResult {
        let result = self.fetch(symbol);
        if let Err(e) = &result {
            log::debug!("{} lookup for {} failed: {}", self.market(), symbol, e);
        }
        result.into()
    }
}

/// Read a price field that may be a JSON number, a numeric string, `null` or missing.
///
/// Missing and `null` become 0; anything that is not a finite number is an error.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    to_f64(value).map_err(serde::de::Error::custom)
}

fn to_f64(value: Option<Value>) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| FetchError::InvalidNumber(n.to_string())),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| FetchError::InvalidNumber(format!("{:?}", s))),
        Some(other) => Err(FetchError::InvalidNumber(other.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Transport double that replays one canned outcome and records the requested URL.
    pub(crate) struct FakeTransport {
        outcome: RefCell<Option<Result<String>>>,
        pub(crate) requested: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        pub(crate) fn body(body: &str) -> Self {
            Self::with(Ok(body.to_string()))
        }

        pub(crate) fn with(outcome: Result<String>) -> Self {
            FakeTransport {
                outcome: RefCell::new(Some(outcome)),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl crate::http::Transport for FakeTransport {
        fn get_text(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            self.outcome
                .borrow_mut()
                .take()
                .expect("transport called more than once")
        }
    }

    /// URL of a local port nothing listens on.
    pub(crate) fn refused_url() -> String {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        format!("http://{}/", addr)
    }

    /// URL of a local server that accepts connections and never answers.
    pub(crate) fn silent_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });

        format!("http://{}/", addr)
    }

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        v: f64,
    }

    fn probe(json: &str) -> std::result::Result<f64, serde_json::Error> {
        serde_json::from_str::<Probe>(json).map(|p| p.v)
    }

    #[test]
    fn lenient_f64_accepts_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"v": 2.5}"#).unwrap(), 2.5);
        assert_eq!(probe(r#"{"v": 7}"#).unwrap(), 7.0);
        assert_eq!(probe(r#"{"v": "1950000.5"}"#).unwrap(), 1950000.5);
        assert_eq!(probe(r#"{"v": " -1.25 "}"#).unwrap(), -1.25);
    }

    #[test]
    fn lenient_f64_defaults_missing_and_null_to_zero() {
        assert_eq!(probe("{}").unwrap(), 0.0);
        assert_eq!(probe(r#"{"v": null}"#).unwrap(), 0.0);
    }

    #[test]
    fn lenient_f64_rejects_other_shapes() {
        assert!(probe(r#"{"v": "abc"}"#).is_err());
        assert!(probe(r#"{"v": "NaN"}"#).is_err());
        assert!(probe(r#"{"v": "inf"}"#).is_err());
        assert!(probe(r#"{"v": "-infinity"}"#).is_err());
        assert!(probe(r#"{"v": true}"#).is_err());
        assert!(probe(r#"{"v": [1]}"#).is_err());
    }
}
