//! Command-line arguments for `fetch_price`.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Positional arguments of `fetch_price`. Every value is taken literally, so there are
/// no help or version flags and hyphen-leading symbols are accepted.
#[derive(Debug, Parser)]
#[command(name = "fetch_price", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Asset type: gold, silver, currency or crypto (case-insensitive).
    #[arg(allow_hyphen_values = true)]
    pub asset_type: String,

    /// Instrument symbol or trading pair, e.g. `gram-altin` or `BTCTRY`.
    #[arg(allow_hyphen_values = true)]
    pub symbol: String,

    /// Anything after the symbol is accepted and ignored.
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub extra: Vec<String>,
}
