use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// `SYMBOL=PRICE` pairs, comma separated.
    pub usd_prices: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: "./db/app.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            usd_prices: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("TF_LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid TF_LISTEN_ADDR: {}", raw))?,
            Err(_) => defaults.listen_addr,
        };
        let db_path = std::env::var("TF_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow = split_origins(
            &std::env::var("TF_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let timeout_ms: u64 = std::env::var("TF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let usd_prices = std::env::var("TF_USD_PRICES").unwrap_or_default();

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            usd_prices,
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.usd_prices.is_empty());
    }

    #[test]
    fn test_split_origins_drops_blanks() {
        assert_eq!(
            split_origins(" http://a.test ,,http://b.test, "),
            vec!["http://a.test", "http://b.test"]
        );
    }
}
