use std::sync::Arc;

use crate::config::Config;
use fxdeals_core::{
    currency::IsoCurrencyValidator,
    deals::{DealRepositoryTrait, DealService, DealServiceTrait},
};
use fxdeals_storage_sqlite::{
    db::{self, write_actor, DbPool},
    deals::DealRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub deal_service: Arc<dyn DealServiceTrait + Send + Sync>,
    pub deal_repository: Arc<dyn DealRepositoryTrait + Send + Sync>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init: a subscriber may already be installed (tests, embedding).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone())?;

    let deal_repository = Arc::new(DealRepository::new(pool.clone(), writer));
    let currency_validator = Arc::new(IsoCurrencyValidator::new());
    let deal_service: Arc<dyn DealServiceTrait + Send + Sync> = Arc::new(DealService::new(
        deal_repository.clone(),
        currency_validator,
    ));

    Ok(Arc::new(AppState {
        deal_service,
        deal_repository,
        pool,
    }))
}
