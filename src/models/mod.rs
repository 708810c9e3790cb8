//! Data models for the LodgeDesk back office
//!
//! This module contains the core domain models organized by concern:
//! - Itinerary: hotel stays and their date spans
//! - Contract: supplier contracts, rate cards, and terms
//! - Client: agency clients and their booking history
//! - Money: currency metadata and display formatting

pub mod client;
pub mod contract;
pub mod itinerary;
pub mod money;

// Re-export all public types for convenient access
pub use client::{BookingRecord, BookingStatus, Client};
pub use contract::{ContractTerm, HotelContract, RoomRates, RoomType, Season, SpecialOffer, TermKind};
pub use itinerary::ItineraryItem;
pub use money::{Currency, supported_currencies};
