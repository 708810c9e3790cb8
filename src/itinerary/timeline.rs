//! The mutable itinerary board
//!
//! Owns the stay list exclusively; every mutation goes through a method here
//! and conflicts are recomputed from scratch afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LodgeDeskError;
use crate::itinerary::conflict::{Conflict, detect_conflicts};
use crate::models::ItineraryItem;

/// Aggregate trip numbers for the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Span from the first check-in to the check-out of the stay with the
    /// latest check-in
    pub days: i64,
    /// Sum of per-stay night counts
    pub nights: i64,
    pub destinations: usize,
    pub conflicts: usize,
}

/// The itinerary list plus its derived conflicts
#[derive(Debug, Default, Clone)]
pub struct ItineraryBoard {
    items: Vec<ItineraryItem>,
    conflicts: Vec<Conflict>,
}

impl ItineraryBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a board from existing stays.
    #[must_use]
    pub fn with_items(items: Vec<ItineraryItem>) -> Self {
        let conflicts = detect_conflicts(&items);
        Self { items, conflicts }
    }

    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Add a stay. Fails if the id is already taken.
    pub fn add(&mut self, item: ItineraryItem) -> Result<(), LodgeDeskError> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(LodgeDeskError::validation(format!(
                "itinerary already contains a stay with id {}",
                item.id
            )));
        }
        debug!(id = %item.id, hotel = %item.hotel_name, "Adding stay to itinerary");
        self.items.push(item);
        self.recompute();
        Ok(())
    }

    /// Remove a stay by id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|item| item.id != item_id);
        self.recompute();
    }

    /// Edit a stay's date span, recomputing its night count and the conflict
    /// list. Invalid spans are rejected and leave the board unchanged.
    pub fn update_dates(
        &mut self,
        item_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<(), LodgeDeskError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| {
                LodgeDeskError::validation(format!("no stay with id {item_id} on the itinerary"))
            })?;
        item.set_dates(check_in, check_out)?;
        self.recompute();
        Ok(())
    }

    /// Move a stay so it sits at the position another stay currently
    /// occupies, preserving the relative order of everything else. Dropping a
    /// stay onto itself is a no-op.
    pub fn reorder(&mut self, dragged_id: &str, target_id: &str) -> Result<(), LodgeDeskError> {
        if dragged_id == target_id {
            return Ok(());
        }
        let dragged_index = self.index_of(dragged_id)?;
        self.index_of(target_id)?;
        let dragged = self.items.remove(dragged_index);
        // Target index is resolved after removal so the stay lands exactly in
        // the target's current slot.
        let target_index = self.index_of(target_id)?;
        self.items.insert(target_index, dragged);
        Ok(())
    }

    /// Aggregate trip numbers across all stays.
    #[must_use]
    pub fn summary(&self) -> TripSummary {
        if self.items.is_empty() {
            return TripSummary {
                days: 0,
                nights: 0,
                destinations: 0,
                conflicts: self.conflicts.len(),
            };
        }

        let mut sorted: Vec<&ItineraryItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.check_in.cmp(&b.check_in).then_with(|| a.id.cmp(&b.id)));

        let first_check_in = sorted.first().map(|item| item.check_in).unwrap_or_default();
        let last_check_out = sorted.last().map(|item| item.check_out).unwrap_or_default();

        TripSummary {
            days: (last_check_out - first_check_in).num_days(),
            nights: self.items.iter().map(|item| item.nights).sum(),
            destinations: self.items.len(),
            conflicts: self.conflicts.len(),
        }
    }

    fn index_of(&self, item_id: &str) -> Result<usize, LodgeDeskError> {
        self.items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| {
                LodgeDeskError::validation(format!("no stay with id {item_id} on the itinerary"))
            })
    }

    fn recompute(&mut self) {
        self.conflicts = detect_conflicts(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::conflict::ConflictKind;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn stay(id: &str, name: &str, check_in: NaiveDate, check_out: NaiveDate) -> ItineraryItem {
        ItineraryItem::new(id, name, "Kruger National Park", check_in, check_out, 2, 500.0)
            .unwrap()
    }

    fn seeded_board() -> ItineraryBoard {
        ItineraryBoard::with_items(vec![
            stay("1", "Sabi Sands Safari Lodge", date(3, 15), date(3, 18)),
            stay("2", "Thornybush Game Lodge", date(3, 20), date(3, 23)),
        ])
    }

    #[test]
    fn test_summary_of_seeded_board() {
        let board = seeded_board();
        let summary = board.summary();
        assert_eq!(summary.days, 8);
        assert_eq!(summary.nights, 6);
        assert_eq!(summary.destinations, 2);
        // Mar 18 -> Mar 20 is a two-day gap
        assert_eq!(summary.conflicts, 1);
    }

    #[test]
    fn test_empty_board_summary() {
        let board = ItineraryBoard::new();
        assert_eq!(
            board.summary(),
            TripSummary {
                days: 0,
                nights: 0,
                destinations: 0,
                conflicts: 0
            }
        );
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut board = seeded_board();
        let dup = stay("1", "Madikwe Safari Lodge", date(4, 1), date(4, 3));
        assert!(board.add(dup).is_err());
        assert_eq!(board.items().len(), 2);
    }

    #[test]
    fn test_mutations_recompute_conflicts() {
        let mut board = seeded_board();
        assert_eq!(board.conflicts().len(), 1);

        // Closing the gap clears the conflict
        board.update_dates("2", date(3, 18), date(3, 23)).unwrap();
        assert!(board.conflicts().is_empty());

        // Pulling the second stay forward creates an overlap
        board.update_dates("2", date(3, 16), date(3, 23)).unwrap();
        assert_eq!(board.conflicts().len(), 1);
        assert_eq!(board.conflicts()[0].kind, ConflictKind::Overlap);

        board.remove("2");
        assert!(board.conflicts().is_empty());
    }

    #[test]
    fn test_update_dates_invalid_span_keeps_board() {
        let mut board = seeded_board();
        let before = board.items().to_vec();
        assert!(board.update_dates("1", date(3, 18), date(3, 15)).is_err());
        assert_eq!(board.items(), &before[..]);
    }

    #[test]
    fn test_reorder_moves_item_to_target_slot() {
        let mut board = ItineraryBoard::with_items(vec![
            stay("1", "Sabi Sands Safari Lodge", date(3, 1), date(3, 3)),
            stay("2", "Thornybush Game Lodge", date(3, 3), date(3, 5)),
            stay("3", "Madikwe Safari Lodge", date(3, 5), date(3, 7)),
        ]);

        board.reorder("3", "1").unwrap();
        let ids: Vec<&str> = board.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);

        // Self-drop is a no-op
        board.reorder("2", "2").unwrap();
        let ids: Vec<&str> = board.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);

        assert!(board.reorder("2", "missing").is_err());
    }
}
