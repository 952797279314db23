use log::warn;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use super::pricing_traits::PriceProviderTrait;
use crate::assets::AssetId;

/// Price table fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedPriceProvider {
    prices: HashMap<String, Decimal>,
}

impl FixedPriceProvider {
    pub fn new(prices: HashMap<String, Decimal>) -> Self {
        Self { prices }
    }

    /// Parses `SYMBOL=PRICE` pairs separated by commas, e.g. `BTC=65000,XMR=150.5`.
    ///
    /// Malformed pairs are skipped with a warning.
    pub fn from_pairs(spec: &str) -> Self {
        let prices = spec
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let parsed = pair.split_once('=').and_then(|(symbol, price)| {
                    Decimal::from_str(price.trim())
                        .ok()
                        .map(|price| (symbol.trim().to_string(), price))
                });
                if parsed.is_none() {
                    warn!("Ignoring malformed price entry '{}'", pair);
                }
                parsed
            })
            .collect();
        Self { prices }
    }
}

impl PriceProviderTrait for FixedPriceProvider {
    fn usd_price(&self, asset: &AssetId) -> Option<Decimal> {
        self.prices.get(asset.as_str()).copied()
    }
}
