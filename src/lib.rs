//! `LodgeDesk` - Back-office service for safari travel agencies
//!
//! This library provides the core functionality for itinerary planning with
//! conflict detection, commission and markup calculation with live currency
//! conversion, supplier contract intelligence, and client booking history.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod pricing;
pub mod rates;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use config::LodgeDeskConfig;
pub use error::LodgeDeskError;
pub use itinerary::{Conflict, ConflictKind, ItineraryBoard, TripSummary, detect_conflicts};
pub use pricing::{PricingBreakdown, PricingTier, QuoteSheet, price_stay};
pub use rates::{Conversion, RateService, RateTable};
pub use store::{ClientBook, ContractDirectory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, LodgeDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
