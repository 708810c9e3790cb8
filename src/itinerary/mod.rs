//! Itinerary timeline management
//!
//! This module provides the itinerary planning functionality:
//! - Scheduling-conflict detection between consecutive stays
//! - The mutable itinerary board (add, edit, reorder, remove)
//! - Trip duration summaries

pub mod conflict;
pub mod timeline;

// Re-export commonly used types from submodules
pub use conflict::{Conflict, ConflictKind, detect_conflicts};
pub use timeline::{ItineraryBoard, TripSummary};
