//! Fetch Price — looks up one gold/currency or crypto quote and prints it to stdout as
//! a single line of JSON.
//!
//! Usage example (CLI):
//! ```bash
//! fetch_price crypto BTCTRY
//! fetch_price gold gram-altin
//! ```
//!
//! Every outcome is reported in the JSON body through its `success` flag. The exit code
//! is 1 only when the two positional arguments are missing; upstream failures still
//! exit 0. Set `RUST_LOG=debug` to see request diagnostics on stderr.
#![warn(missing_docs)]
mod args;

use std::process::ExitCode;

use crate::args::Args;
use clap::Parser;
use log::{debug, error};
use quote_common::{Dispatcher, FetchError, QuoteResult, Settings};

/// Message reported when the positional arguments are missing.
const USAGE: &str = "Usage: fetch_price <type> <symbol>";

fn main() -> ExitCode {
    init_logger();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            debug!("argument parsing failed: {}", e);
            emit(&FetchError::Usage(USAGE.to_string()).into());
            return ExitCode::FAILURE;
        }
    };
    if !args.extra.is_empty() {
        debug!("ignoring trailing arguments: {:?}", args.extra);
    }

    let settings = Settings::from_env();
    let result = Dispatcher::from_settings(&settings).dispatch(&args.asset_type, Some(&args.symbol));
    emit(&result);

    ExitCode::SUCCESS
}

/// Print `result` as one JSON line.
fn emit(result: &QuoteResult) {
    match result.to_json_line() {
        Ok(line) => println!("{}", line),
        Err(e) => {
            error!("Failed to serialize quote to JSON: {}", e);
            println!(r#"{{"success":false,"error":"serialization failed"}}"#);
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Off)
        .parse_default_env()
        .init();
}
