//! Integration tests for the LodgeDesk library surface

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use lodgedesk::config::LodgeDeskConfig;
use lodgedesk::itinerary::{ConflictKind, ItineraryBoard};
use lodgedesk::models::{ItineraryItem, RoomType};
use lodgedesk::pricing::price_stay;
use lodgedesk::rates::{
    Conversion, ExchangeRate, RateProvider, RateService, RateSnapshot, SnapshotStore,
};
use lodgedesk::store::ContractDirectory;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A trip quoted end to end: contracted rate, markup pricing, and the
/// itinerary's conflict check.
#[test]
fn test_quote_a_trip_from_contract_to_itinerary() {
    let directory = ContractDirectory::seeded();

    // Contracted March rate for a double at Sabi Sands
    let net_rate = directory
        .current_rate("Sabi Sands Safari Lodge", date(2025, 3, 15), RoomType::Double)
        .unwrap();
    assert_eq!(net_rate, 520.0);

    // Priced with the agency's standard markup and commission
    let breakdown = price_stay(net_rate, 25.0, 15.0, 3, 2, 1);
    assert_eq!(breakdown.selling_rate, 650.0);
    assert_eq!(breakdown.total_selling, 3900.0);
    assert_eq!(breakdown.commission, 585.0);

    // On the itinerary, the follow-on stay starts before this one ends
    let mut board = ItineraryBoard::new();
    board
        .add(
            ItineraryItem::new(
                "1",
                "Sabi Sands Safari Lodge",
                "Sabi Sands, South Africa",
                date(2025, 3, 15),
                date(2025, 3, 18),
                2,
                net_rate,
            )
            .unwrap(),
        )
        .unwrap();
    board
        .add(
            ItineraryItem::new(
                "2",
                "Thornybush Game Lodge",
                "Thornybush, South Africa",
                date(2025, 3, 17),
                date(2025, 3, 20),
                2,
                380.0,
            )
            .unwrap(),
        )
        .unwrap();

    assert_eq!(board.conflicts().len(), 1);
    assert_eq!(board.conflicts()[0].kind, ConflictKind::Overlap);

    // Fixing the dates clears the conflict
    board
        .update_dates("2", date(2025, 3, 18), date(2025, 3, 21))
        .unwrap();
    assert!(board.conflicts().is_empty());
}

struct OfflineProvider;

#[async_trait]
impl RateProvider for OfflineProvider {
    async fn latest(&self, _base: &str) -> Result<HashMap<String, f64>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

struct MemoryStore {
    snapshot: Mutex<Option<RateSnapshot>>,
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<RateSnapshot>> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn save(&self, snapshot: RateSnapshot) -> Result<()> {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        Ok(())
    }
}

/// With the rate API unreachable, previously persisted rates keep currency
/// conversion working and the status reports offline.
#[tokio::test]
async fn test_rates_survive_an_outage() {
    let mut rates = HashMap::new();
    rates.insert(
        "USD".to_string(),
        ExchangeRate {
            from: "ZAR".to_string(),
            to: "USD".to_string(),
            rate: 0.054,
            timestamp: 1_735_000_000_000,
        },
    );
    let store = Arc::new(MemoryStore {
        snapshot: Mutex::new(Some(RateSnapshot {
            rates,
            last_updated: 1_735_000_000_000,
            base_currency: "ZAR".to_string(),
        })),
    });

    let service = RateService::new(
        Arc::new(OfflineProvider),
        store,
        "ZAR",
        vec!["ZAR".to_string(), "USD".to_string()],
    );
    service.load_persisted().await;
    service.refresh().await;

    let status = service.status();
    assert!(!status.is_online);
    assert!(status.error.is_some());
    assert_eq!(
        service.convert(1000.0, "ZAR", "USD"),
        Conversion::Converted(54.0)
    );
}

#[test]
fn test_config_loads_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[rates]
base_currency = "USD"
update_frequency_minutes = 30

[cache]

[logging]
level = "debug"

[defaults]
commission_percent = 12.5
"#
    )
    .unwrap();

    let config = LodgeDeskConfig::load_from_path(Some(path)).unwrap();
    assert_eq!(config.rates.base_currency, "USD");
    assert_eq!(config.rates.update_frequency_minutes, 30);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.defaults.commission_percent, 12.5);
    // Untouched settings keep their defaults
    assert_eq!(config.defaults.markup_percent, 25.0);
    assert_eq!(config.defaults.bookings_per_page, 10);
}
