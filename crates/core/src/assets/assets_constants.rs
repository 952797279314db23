/// Identifiers the default resolver accepts out of the box.
///
/// Fiat currencies use their ISO code, crypto assets their common ticker.
pub const KNOWN_ASSET_IDS: &[&str] = &[
    // Fiat
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "CNY", "KRW", "SGD", "HKD", "SEK", "NOK",
    "DKK", "PLN", "BRL", "INR", "RUB", "TRY", "ZAR", "MXN", "NZD",
    // Crypto
    "BTC", "ETH", "ETC", "XMR", "BNB", "LTC", "BCH", "XRP", "XLM", "ADA", "DOT", "DOGE", "ZEC",
    "DASH", "EOS", "TRX", "ATOM", "LINK", "UNI", "AAVE", "MKR", "COMP", "SNX", "YFI", "SOL",
    "AVAX", "MATIC", "ALGO", "XTZ", "FIL", "DAI", "USDC", "USDT", "RDN", "GNO", "REP", "ZRX",
    "BAT", "KNC", "OMG", "SAI",
];
