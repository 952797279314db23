//! Pricing module - USD valuation of balances for display.
//!
//! Valuations are never stored; callers attach them when presenting a
//! collection.

mod fixed_price_provider;
mod pricing_traits;

pub use fixed_price_provider::FixedPriceProvider;
pub use pricing_traits::PriceProviderTrait;
