//! Quote Result data model and JSON encoding helpers.
//!
//! A `QuoteResult` is the single record the tool emits per invocation. It is either a
//! `SuccessQuote` with normalized price fields or a `FailureQuote` carrying the cause.
//! Both serialize as one flat JSON object whose first key, `success`, tells them apart.

use chrono::Local;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::result::Result;

/// Local wall-clock format with microseconds and no offset, e.g. `2026-10-16T09:30:12.482113`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Normalized quote returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessQuote {
    /// Symbol or pair as requested by the caller.
    pub symbol: String,
    /// Human-readable instrument name.
    pub name: String,
    /// Latest price.
    pub current_price: f64,
    /// Reference price the change is measured against.
    pub previous_close: f64,
    /// Change against `previous_close`, in percent.
    pub change_percent: f64,
    /// Provider name.
    pub market: String,
    /// Local generation time in ISO-8601.
    pub timestamp: String,
}

/// Failure record carrying a human-readable cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureQuote {
    /// Description of what went wrong.
    pub error: String,
}

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteResult {
    /// The provider answered and the fields were mapped.
    Success(SuccessQuote),
    /// Anything else.
    Failure(FailureQuote),
}

/// Wire shape: the discriminator followed by the variant's own fields.
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for QuoteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            QuoteResult::Success(quote) => Tagged { success: true, body: quote }.serialize(serializer),
            QuoteResult::Failure(failure) => Tagged { success: false, body: failure }.serialize(serializer),
        }
    }
}

impl QuoteResult {
    /// Build a failure from any displayable cause.
    pub fn failure(error: impl ToString) -> Self {
        QuoteResult::Failure(FailureQuote {
            error: error.to_string(),
        })
    }

    /// Value of the `success` discriminator.
    pub fn is_success(&self) -> bool {
        matches!(self, QuoteResult::Success(_))
    }

    /// Encode as compact single-line JSON.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Result<SuccessQuote>> for QuoteResult {
    fn from(result: Result<SuccessQuote>) -> Self {
        match result {
            Ok(quote) => QuoteResult::Success(quote),
            Err(e) => QuoteResult::failure(e),
        }
    }
}

impl From<FetchError> for QuoteResult {
    fn from(err: FetchError) -> Self {
        QuoteResult::failure(err)
    }
}

/// Current local time in the quote timestamp format.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> SuccessQuote {
        SuccessQuote {
            symbol: "gram-altin".to_string(),
            name: "Gram Altın".to_string(),
            current_price: 2500.5,
            previous_close: 2490.0,
            change_percent: 0.4,
            market: "Dovizcom".to_string(),
            timestamp: "2026-10-16T09:30:12.482113".to_string(),
        }
    }

    #[test]
    fn success_line_starts_with_discriminator_and_keeps_utf8() {
        let line = QuoteResult::Success(sample()).to_json_line().unwrap();

        assert!(line.starts_with(r#"{"success":true,"symbol":"gram-altin","name":"Gram Altın""#));
        assert!(!line.contains('\n'));
        assert!(!line.contains("error"));
    }

    #[test]
    fn failure_line_has_only_discriminator_and_error() {
        let line = QuoteResult::failure(FetchError::NoData).to_json_line().unwrap();
        assert_eq!(line, r#"{"success":false,"error":"No data"}"#);
    }

    #[test]
    fn numbers_stay_numeric() {
        let line = QuoteResult::Success(sample()).to_json_line().unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["current_price"].as_f64(), Some(2500.5));
        assert_eq!(value["previous_close"].as_f64(), Some(2490.0));
        assert_eq!(value["change_percent"].as_f64(), Some(0.4));
    }

    #[test]
    fn collapses_errors_into_failure() {
        let result: QuoteResult = Err::<SuccessQuote, _>(FetchError::UnsupportedType("bond".into())).into();

        assert!(!result.is_success());
        assert_eq!(result, QuoteResult::failure("Unsupported type: bond"));
    }

    #[test]
    fn timestamp_is_iso_local_without_offset() {
        let ts = now_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(ts.len(), "2026-10-16T09:30:12.482113".len());
    }
}
