//! Location enumeration and its symbol form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::location_codec::LocationError;

/// Where an asset is held.
///
/// The serialized form is the lowercase symbol returned by [`Location::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Location {
    /// Held outside any tracked venue (cold storage, a friend, a safe).
    External,
    /// An on-chain wallet the user controls.
    Blockchain,
    /// Traditional bank accounts.
    Banks,
    Equities,
    RealEstate,
    Commodities,
    Kraken,
    Poloniex,
    Bittrex,
    Binance,
    BinanceUs,
    Bitmex,
    Coinbase,
    CoinbasePro,
    Gemini,
    Bitstamp,
    Bitfinex,
    Bitcoinde,
    Bitpanda,
    Iconomi,
    Kucoin,
    Cryptocom,
    IndependentReserve,
    Nexo,
    BlockFi,
    Uphold,
    Bisq,
    Uniswap,
    Sushiswap,
    Balancer,
    Loopring,
    Gitcoin,
    ShapeShift,
}

impl Location {
    /// Every location, in declaration order.
    pub const ALL: &'static [Location] = &[
        Location::External,
        Location::Blockchain,
        Location::Banks,
        Location::Equities,
        Location::RealEstate,
        Location::Commodities,
        Location::Kraken,
        Location::Poloniex,
        Location::Bittrex,
        Location::Binance,
        Location::BinanceUs,
        Location::Bitmex,
        Location::Coinbase,
        Location::CoinbasePro,
        Location::Gemini,
        Location::Bitstamp,
        Location::Bitfinex,
        Location::Bitcoinde,
        Location::Bitpanda,
        Location::Iconomi,
        Location::Kucoin,
        Location::Cryptocom,
        Location::IndependentReserve,
        Location::Nexo,
        Location::BlockFi,
        Location::Uphold,
        Location::Bisq,
        Location::Uniswap,
        Location::Sushiswap,
        Location::Balancer,
        Location::Loopring,
        Location::Gitcoin,
        Location::ShapeShift,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::External => "external",
            Location::Blockchain => "blockchain",
            Location::Banks => "banks",
            Location::Equities => "equities",
            Location::RealEstate => "realestate",
            Location::Commodities => "commodities",
            Location::Kraken => "kraken",
            Location::Poloniex => "poloniex",
            Location::Bittrex => "bittrex",
            Location::Binance => "binance",
            Location::BinanceUs => "binance_us",
            Location::Bitmex => "bitmex",
            Location::Coinbase => "coinbase",
            Location::CoinbasePro => "coinbasepro",
            Location::Gemini => "gemini",
            Location::Bitstamp => "bitstamp",
            Location::Bitfinex => "bitfinex",
            Location::Bitcoinde => "bitcoinde",
            Location::Bitpanda => "bitpanda",
            Location::Iconomi => "iconomi",
            Location::Kucoin => "kucoin",
            Location::Cryptocom => "cryptocom",
            Location::IndependentReserve => "independentreserve",
            Location::Nexo => "nexo",
            Location::BlockFi => "blockfi",
            Location::Uphold => "uphold",
            Location::Bisq => "bisq",
            Location::Uniswap => "uniswap",
            Location::Sushiswap => "sushiswap",
            Location::Balancer => "balancer",
            Location::Loopring => "loopring",
            Location::Gitcoin => "gitcoin",
            Location::ShapeShift => "shapeshift",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbols are matched case-insensitively.
impl FromStr for Location {
    type Err = LocationError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .copied()
            .find(|location| location.as_str().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| LocationError::UnknownSymbol(symbol.to_string()))
    }
}

impl From<Location> for &'static str {
    fn from(location: Location) -> Self {
        location.as_str()
    }
}

impl TryFrom<String> for Location {
    type Error = LocationError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        symbol.parse()
    }
}
