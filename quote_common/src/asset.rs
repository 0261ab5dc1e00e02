//! Asset-type tags accepted by the dispatcher.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Symbol used by the gold/currency provider when none is given.
pub const DEFAULT_GOLD_SYMBOL: &str = "gram-altin";
/// Pair used by the crypto provider when none is given.
pub const DEFAULT_CRYPTO_SYMBOL: &str = "BTCTRY";

/// Set of supported asset types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Precious metal, served by the gold/currency provider.
    Gold,
    /// Precious metal, served by the gold/currency provider.
    Silver,
    /// Fiat currency, served by the gold/currency provider.
    Currency,
    /// Cryptocurrency pair, served by the ticker provider.
    Crypto,
}

impl AssetType {
    /// Symbol substituted when the caller does not supply one.
    pub fn default_symbol(&self) -> &'static str {
        match self {
            AssetType::Gold | AssetType::Silver | AssetType::Currency => DEFAULT_GOLD_SYMBOL,
            AssetType::Crypto => DEFAULT_CRYPTO_SYMBOL,
        }
    }
}
