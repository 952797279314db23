use rust_decimal::Decimal;

use crate::assets::AssetId;
use crate::balances::ManualBalance;

/// Supplies USD prices for resolved assets.
pub trait PriceProviderTrait: Send + Sync {
    /// Price of one unit of `asset` in USD, if known.
    fn usd_price(&self, asset: &AssetId) -> Option<Decimal>;

    fn usd_value(&self, balance: &ManualBalance) -> Option<Decimal> {
        self.usd_price(&balance.asset)
            .and_then(|price| price.checked_mul(balance.amount))
    }
}
