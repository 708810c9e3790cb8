use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use lodgedesk::api::AppState;
use lodgedesk::config::LodgeDeskConfig;
use lodgedesk::itinerary::ItineraryBoard;
use lodgedesk::models::supported_currencies;
use lodgedesk::pricing::QuoteSheet;
use lodgedesk::rates::{CacheSnapshotStore, ExchangeRateApiClient, RateRefresher, RateService};
use lodgedesk::store::{ClientBook, ContractDirectory};
use lodgedesk::{cache, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = LodgeDeskConfig::load()?;
    init_tracing(&config);

    cache::init(cache_path(&config.cache.location))?;

    let provider = Arc::new(ExchangeRateApiClient::new(
        config.rates.base_url.clone(),
        Duration::from_secs(config.rates.timeout_seconds.into()),
    )?);
    let supported = supported_currencies()
        .iter()
        .map(|c| c.code.to_string())
        .collect();
    let rates = Arc::new(RateService::new(
        provider,
        Arc::new(CacheSnapshotStore),
        config.rates.base_currency.clone(),
        supported,
    ));
    rates.load_persisted().await;
    rates.refresh().await;

    let _refresher = config.rates.auto_update.then(|| {
        RateRefresher::spawn(
            rates.clone(),
            Duration::from_secs(u64::from(config.rates.update_frequency_minutes) * 60),
        )
    });

    let state = Arc::new(AppState {
        itinerary: RwLock::new(ItineraryBoard::new()),
        quote: RwLock::new(QuoteSheet::new(
            config.defaults.markup_percent,
            config.defaults.commission_percent,
        )),
        rates,
        contracts: ContractDirectory::seeded(),
        clients: ClientBook::seeded(),
        bookings_per_page: config.defaults.bookings_per_page as usize,
    });

    web::run(&config.defaults.listen_address, state).await
}

fn init_tracing(config: &LodgeDeskConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cache_path(location: &str) -> PathBuf {
    if let Some(rest) = location.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(location)
}
