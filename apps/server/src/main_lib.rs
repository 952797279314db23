use std::sync::Arc;

use crate::config::Config;
use tallyfolio_core::{
    assets::StaticAssetResolver,
    balances::{ManualBalanceService, ManualBalanceServiceTrait},
    pricing::{FixedPriceProvider, PriceProviderTrait},
    tags::{TagService, TagServiceTrait},
};
use tallyfolio_storage_sqlite::{db, ManualBalanceRepository, TagRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub balance_service: Arc<dyn ManualBalanceServiceTrait>,
    pub tag_service: Arc<dyn TagServiceTrait>,
    pub price_provider: Arc<dyn PriceProviderTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let tag_repository = Arc::new(TagRepository::new(pool.clone(), writer.clone()));
    let balance_repository = Arc::new(ManualBalanceRepository::new(pool.clone(), writer.clone()));

    let balance_service = Arc::new(ManualBalanceService::new(
        balance_repository,
        tag_repository.clone(),
        Arc::new(StaticAssetResolver::default()),
    ));
    let tag_service = Arc::new(TagService::new(tag_repository));
    let price_provider = Arc::new(FixedPriceProvider::from_pairs(&config.usd_prices));

    Ok(Arc::new(AppState {
        balance_service,
        tag_service,
        price_provider,
    }))
}
