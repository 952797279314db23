use rust_decimal::Decimal;
use serde::Serialize;

use tallyfolio_core::balances::ManualBalance;
use tallyfolio_core::pricing::PriceProviderTrait;

/// A balance as returned to clients, with its display valuation.
#[derive(Debug, Serialize)]
pub struct BalanceView {
    #[serde(flatten)]
    pub balance: ManualBalance,
    #[serde(with = "tallyfolio_core::utils::decimal_serde::decimal_serde_option")]
    pub usd_value: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct BalancesResult {
    pub balances: Vec<BalanceView>,
}

impl BalancesResult {
    pub fn valued(balances: Vec<ManualBalance>, prices: &dyn PriceProviderTrait) -> Self {
        let balances = balances
            .into_iter()
            .map(|balance| BalanceView {
                usd_value: prices.usd_value(&balance),
                balance,
            })
            .collect();
        Self { balances }
    }
}
