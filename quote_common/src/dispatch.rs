//! Routing from an asset-type tag to a provider.
//!
//! Exactly one provider is consulted per call. Unknown tags are answered without any
//! network traffic.
use log::debug;

use crate::asset::AssetType;
use crate::config::Settings;
use crate::error::FetchError;
use crate::http::{HttpTransport, Transport};
use crate::provider::{BtcTurk, Dovizcom, QuoteProvider};
use crate::quote::QuoteResult;

/// The two providers a tag can be routed to.
pub struct Dispatcher<G: QuoteProvider, C: QuoteProvider> {
    gold: G,
    crypto: C,
}

impl Dispatcher<Dovizcom, BtcTurk> {
    /// Live providers on the endpoints from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Dispatcher::new(
            Dovizcom::with_transport(HttpTransport::new(), &settings.dovizcom_url),
            BtcTurk::with_transport(HttpTransport::new(), &settings.btcturk_url),
        )
    }
}

impl<T: Transport + Clone> Dispatcher<Dovizcom<T>, BtcTurk<T>> {
    /// Both providers sharing one transport implementation.
    pub fn with_transport(transport: T, settings: &Settings) -> Self {
        Dispatcher::new(
            Dovizcom::with_transport(transport.clone(), &settings.dovizcom_url),
            BtcTurk::with_transport(transport, &settings.btcturk_url),
        )
    }
}

impl<G: QuoteProvider, C: QuoteProvider> Dispatcher<G, C> {
    /// Dispatcher over explicit providers.
    pub fn new(gold: G, crypto: C) -> Self {
        Dispatcher { gold, crypto }
    }

    /// Look up `symbol` for `asset_type`.
    ///
    /// The tag is matched case-insensitively. A missing symbol falls back to the
    /// asset type's default.
    pub fn dispatch(&self, asset_type: &str, symbol: Option<&str>) -> QuoteResult {
        let tag = asset_type.to_lowercase();
        let Ok(asset) = tag.parse::<AssetType>() else {
            debug!("rejecting unsupported asset type {:?}", tag);
            return FetchError::UnsupportedType(tag).into();
        };

        let symbol = symbol.unwrap_or(asset.default_symbol());
        debug!("routing {} {} to provider", asset, symbol);

        match asset {
            AssetType::Gold | AssetType::Silver | AssetType::Currency => self.gold.quote(symbol),
            AssetType::Crypto => self.crypto.quote(symbol),
        }
    }
}
