//! Exchange-rate handling
//!
//! This module provides the currency side of the commission calculator:
//! - The rate table anchored to one base currency, with pure conversions
//! - The HTTP rate provider
//! - The rate service: refresh protocol, offline fallback, staleness

pub mod provider;
pub mod service;
pub mod table;

// Re-export commonly used types from submodules
pub use provider::{ExchangeRateApiClient, RateProvider};
pub use service::{
    CacheSnapshotStore, RateRefresher, RateService, RateSnapshot, RateStatus, SnapshotStore,
};
pub use table::{Conversion, ExchangeRate, RateTable};
