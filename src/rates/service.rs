//! Rate refresh protocol and offline fallback
//!
//! The service owns the live rate table. A refresh fetches a fresh table from
//! the provider, replaces the in-memory one wholesale, and persists a
//! snapshot for offline use. A failed fetch falls back to the most recently
//! persisted snapshot and flags the state offline; it never propagates and
//! never blocks callers. Redundant refreshes are de-duplicated with an
//! "already updating" guard.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache;
use crate::rates::provider::RateProvider;
use crate::rates::table::{Conversion, ExchangeRate, RateTable};

const SNAPSHOT_CACHE_KEY: &str = "exchange_rates";

// Snapshots are the offline fallback, so they must outlive any realistic
// outage window.
const SNAPSHOT_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// The persisted rate blob: the whole table plus its anchor and fetch time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub rates: HashMap<String, ExchangeRate>,
    /// Epoch milliseconds of the successful fetch
    pub last_updated: i64,
    pub base_currency: String,
}

/// Durable home for rate snapshots; seam for tests
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self) -> Result<Option<RateSnapshot>>;
    async fn save(&self, snapshot: RateSnapshot) -> Result<()>;
}

/// Snapshot store backed by the global persistent cache
pub struct CacheSnapshotStore;

#[async_trait]
impl SnapshotStore for CacheSnapshotStore {
    async fn load(&self) -> Result<Option<RateSnapshot>> {
        cache::get(SNAPSHOT_CACHE_KEY).await
    }

    async fn save(&self, snapshot: RateSnapshot) -> Result<()> {
        cache::put(SNAPSHOT_CACHE_KEY, snapshot, SNAPSHOT_TTL).await
    }
}

/// Serializable view of the service state for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateStatus {
    pub base_currency: String,
    pub rates: HashMap<String, ExchangeRate>,
    /// Epoch milliseconds of the last successful fetch, 0 if never
    pub last_updated: i64,
    pub is_online: bool,
    pub error: Option<String>,
    /// Human-readable age bucket, e.g. "5 minutes ago"
    pub age: String,
}

struct RateState {
    table: RateTable,
    last_updated: i64,
    is_online: bool,
    error: Option<String>,
}

/// Live exchange rates with graceful degradation
pub struct RateService {
    provider: Arc<dyn RateProvider>,
    store: Arc<dyn SnapshotStore>,
    /// Currency codes the dashboard quotes in
    supported: Vec<String>,
    state: RwLock<RateState>,
    updating: AtomicBool,
}

impl RateService {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        store: Arc<dyn SnapshotStore>,
        base_currency: impl Into<String>,
        supported: Vec<String>,
    ) -> Self {
        let base = base_currency.into();
        Self {
            provider,
            store,
            supported,
            state: RwLock::new(RateState {
                table: RateTable::empty(base),
                last_updated: 0,
                is_online: false,
                error: None,
            }),
            updating: AtomicBool::new(false),
        }
    }

    /// Load the persisted snapshot, if any, as offline rates. Called on
    /// startup before the first fetch so cached rates are usable immediately.
    pub async fn load_persisted(&self) {
        match self.store.load().await {
            Ok(Some(snapshot)) => {
                let base = self.base_currency();
                if snapshot.base_currency == base {
                    info!("Loaded persisted exchange rates");
                    let mut state = self.state.write().expect("rate state lock poisoned");
                    state.table = RateTable::new(base, snapshot.rates);
                    state.last_updated = snapshot.last_updated;
                    state.is_online = false;
                    state.error = None;
                } else {
                    debug!(
                        snapshot_base = %snapshot.base_currency,
                        "Persisted rates are anchored to a different base, ignoring"
                    );
                }
            }
            Ok(None) => debug!("No persisted exchange rates"),
            Err(e) => warn!("Failed to read persisted exchange rates: {e}"),
        }
    }

    /// Fetch fresh rates, replacing the table wholesale on success and
    /// falling back to the persisted snapshot on failure. A refresh already
    /// in flight makes this call a no-op.
    pub async fn refresh(&self) {
        if self
            .updating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Rate refresh already in progress, skipping");
            return;
        }

        let base = self.base_currency();
        match self.provider.latest(&base).await {
            Ok(fetched) => self.adopt_fresh_rates(&base, &fetched).await,
            Err(e) => {
                warn!("Failed to fetch exchange rates: {e:#}");
                self.fall_back_to_snapshot(&base, format!("{e:#}")).await;
            }
        }

        self.updating.store(false, Ordering::SeqCst);
    }

    /// Whether a refresh is currently in flight.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::SeqCst)
    }

    /// Switch the anchor currency: adopt any persisted snapshot with the new
    /// anchor, then fetch fresh rates.
    pub async fn set_base_currency(&self, base: impl Into<String>) {
        let base = base.into();
        {
            let mut state = self.state.write().expect("rate state lock poisoned");
            state.table = RateTable::empty(base.clone());
            state.last_updated = 0;
            state.is_online = false;
            state.error = None;
        }
        self.load_persisted().await;
        self.refresh().await;
    }

    /// Convert an amount between two supported currency codes.
    #[must_use]
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Conversion {
        self.state
            .read()
            .expect("rate state lock poisoned")
            .table
            .convert(amount, from, to)
    }

    #[must_use]
    pub fn base_currency(&self) -> String {
        self.state
            .read()
            .expect("rate state lock poisoned")
            .table
            .base()
            .to_string()
    }

    /// Current state for the dashboard's live/offline indicator.
    #[must_use]
    pub fn status(&self) -> RateStatus {
        let state = self.state.read().expect("rate state lock poisoned");
        RateStatus {
            base_currency: state.table.base().to_string(),
            rates: state.table.rates().clone(),
            last_updated: state.last_updated,
            is_online: state.is_online,
            error: state.error.clone(),
            age: age_label(state.last_updated, Utc::now().timestamp_millis()),
        }
    }

    async fn adopt_fresh_rates(&self, base: &str, fetched: &HashMap<String, f64>) {
        let timestamp = Utc::now().timestamp_millis();
        let mut rates = HashMap::new();
        for code in &self.supported {
            if code == base {
                continue;
            }
            rates.insert(
                code.clone(),
                ExchangeRate {
                    from: base.to_string(),
                    to: code.clone(),
                    rate: fetched.get(code).copied().unwrap_or(1.0),
                    timestamp,
                },
            );
        }

        info!(base, count = rates.len(), "Adopted fresh exchange rates");
        {
            let mut state = self.state.write().expect("rate state lock poisoned");
            state.table = RateTable::new(base, rates.clone());
            state.last_updated = timestamp;
            state.is_online = true;
            state.error = None;
        }

        let snapshot = RateSnapshot {
            rates,
            last_updated: timestamp,
            base_currency: base.to_string(),
        };
        if let Err(e) = self.store.save(snapshot).await {
            warn!("Failed to persist exchange rates: {e:#}");
        }
    }

    async fn fall_back_to_snapshot(&self, base: &str, error: String) {
        let snapshot = match self.store.load().await {
            Ok(snapshot) => snapshot.filter(|s| s.base_currency == base),
            Err(e) => {
                warn!("Failed to read persisted exchange rates: {e:#}");
                None
            }
        };

        let mut state = self.state.write().expect("rate state lock poisoned");
        match snapshot {
            Some(snapshot) => {
                info!("Falling back to persisted exchange rates");
                state.table = RateTable::new(base.to_string(), snapshot.rates);
                state.last_updated = snapshot.last_updated;
            }
            None => {
                state.table = RateTable::empty(base.to_string());
                state.last_updated = 0;
            }
        }
        state.is_online = false;
        state.error = Some(error);
    }
}

/// Human-readable age of the rate table, bucketed like the dashboard shows
/// it: Never / Just now / minutes / hours / days.
#[must_use]
pub fn age_label(last_updated_ms: i64, now_ms: i64) -> String {
    if last_updated_ms == 0 {
        return "Never".to_string();
    }

    let minutes = (now_ms - last_updated_ms) / (1000 * 60);
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days} day{} ago", if days == 1 { "" } else { "s" })
    } else if hours > 0 {
        format!("{hours} hour{} ago", if hours == 1 { "" } else { "s" })
    } else if minutes > 0 {
        format!("{minutes} minute{} ago", if minutes == 1 { "" } else { "s" })
    } else {
        "Just now".to_string()
    }
}

/// Periodic refresh as a cancellable background task
///
/// The interval fires regardless of whether the previous fetch finished; the
/// service's guard flag prevents overlap. Dropping the refresher aborts the
/// task so long-lived sessions don't leak work.
pub struct RateRefresher {
    handle: JoinHandle<()>,
}

impl RateRefresher {
    /// Spawn a refresher ticking at `every`. The first tick is skipped; the
    /// caller decides when the initial fetch happens.
    #[must_use]
    pub fn spawn(service: Arc<RateService>, every: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            interval.tick().await;
            loop {
                interval.tick().await;
                service.refresh().await;
            }
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for RateRefresher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
