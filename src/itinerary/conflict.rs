//! Scheduling-conflict detection
//!
//! The detector walks stays in check-in order and flags two problems between
//! consecutive pairs: overlapping date ranges, and idle gaps longer than one
//! day. A zero- or one-day gap is a normal transfer day and raises nothing.
//! The detector is a pure function and is rerun in full after every mutation;
//! itinerary lists are small enough that incremental updates would buy
//! nothing.

use serde::{Deserialize, Serialize};

use crate::models::ItineraryItem;

/// The kind of scheduling problem found between two consecutive stays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ConflictKind {
    /// The earlier stay's check-out falls after the later stay's check-in
    Overlap,
    /// More than one idle day between check-out and the next check-in
    Gap { days: i64 },
}

/// A derived conflict record, regenerated on every detection pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    #[serde(flatten)]
    pub kind: ConflictKind,
    /// Ids of the two stays involved, in check-in order
    pub items: (String, String),
    pub message: String,
}

impl Conflict {
    /// Whether a stay is involved in this conflict.
    #[must_use]
    pub fn involves(&self, item_id: &str) -> bool {
        self.items.0 == item_id || self.items.1 == item_id
    }
}

/// Detect all scheduling conflicts in a set of stays.
///
/// Stays are sorted ascending by check-in date, ties broken by id so the
/// output is reproducible, then consecutive pairs are compared. Intervals are
/// assumed valid (check-out strictly after check-in); `ItineraryItem`
/// enforces that at construction.
#[must_use]
pub fn detect_conflicts(items: &[ItineraryItem]) -> Vec<Conflict> {
    let mut sorted: Vec<&ItineraryItem> = items.iter().collect();
    sorted.sort_by(|a, b| a.check_in.cmp(&b.check_in).then_with(|| a.id.cmp(&b.id)));

    let mut conflicts = Vec::new();
    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let lead_days = (next.check_in - current.check_out).num_days();

        if lead_days < 0 {
            conflicts.push(Conflict {
                kind: ConflictKind::Overlap,
                items: (current.id.clone(), next.id.clone()),
                message: format!(
                    "{} checkout overlaps with {} check-in",
                    current.hotel_name, next.hotel_name
                ),
            });
        } else if lead_days > 1 {
            conflicts.push(Conflict {
                kind: ConflictKind::Gap { days: lead_days },
                items: (current.id.clone(), next.id.clone()),
                message: format!(
                    "{} day gap between {} and {}",
                    lead_days, current.hotel_name, next.hotel_name
                ),
            });
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn stay(id: &str, name: &str, check_in: (u32, u32), check_out: (u32, u32)) -> ItineraryItem {
        ItineraryItem::new(
            id,
            name,
            "Kruger National Park",
            NaiveDate::from_ymd_opt(2025, check_in.0, check_in.1).unwrap(),
            NaiveDate::from_ymd_opt(2025, check_out.0, check_out.1).unwrap(),
            2,
            500.0,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_and_single_item_have_no_conflicts() {
        assert!(detect_conflicts(&[]).is_empty());
        assert!(detect_conflicts(&[stay("1", "Sabi Sands", (3, 1), (3, 5))]).is_empty());
    }

    #[test]
    fn test_contiguous_stays_have_no_conflicts() {
        // Back-to-back and one-day transfer gaps are both fine
        let items = vec![
            stay("1", "Sabi Sands", (3, 1), (3, 5)),
            stay("2", "Thornybush", (3, 5), (3, 8)),
            stay("3", "Madikwe", (3, 9), (3, 12)),
        ];
        assert!(detect_conflicts(&items).is_empty());
    }

    #[test]
    fn test_overlap_reported_once_with_both_ids() {
        let items = vec![
            stay("a", "Sabi Sands", (3, 1), (3, 5)),
            stay("b", "Thornybush", (3, 3), (3, 8)),
        ];
        let conflicts = detect_conflicts(&items);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Overlap);
        assert_eq!(conflicts[0].items, ("a".to_string(), "b".to_string()));
        assert!(conflicts[0].message.contains("Sabi Sands"));
        assert!(conflicts[0].message.contains("Thornybush"));
    }

    #[test]
    fn test_gap_reports_day_count() {
        let items = vec![
            stay("a", "Sabi Sands", (3, 1), (3, 5)),
            stay("b", "Thornybush", (3, 10), (3, 15)),
        ];
        let conflicts = detect_conflicts(&items);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Gap { days: 5 });
        assert!(conflicts[0].message.starts_with("5 day gap"));
    }

    #[rstest]
    #[case((3, 5), None)] // same-day handover
    #[case((3, 6), None)] // one transfer day
    #[case((3, 7), Some(2))] // two idle days
    fn test_gap_threshold(#[case] next_check_in: (u32, u32), #[case] gap: Option<i64>) {
        let items = vec![
            stay("a", "Sabi Sands", (3, 1), (3, 5)),
            stay("b", "Thornybush", next_check_in, (3, 20)),
        ];
        let conflicts = detect_conflicts(&items);
        match gap {
            None => assert!(conflicts.is_empty()),
            Some(days) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].kind, ConflictKind::Gap { days });
            }
        }
    }

    #[test]
    fn test_detection_ignores_input_order() {
        let forward = vec![
            stay("a", "Sabi Sands", (3, 1), (3, 5)),
            stay("b", "Thornybush", (3, 3), (3, 8)),
            stay("c", "Madikwe", (3, 14), (3, 16)),
        ];
        let mut shuffled = forward.clone();
        shuffled.reverse();

        assert_eq!(detect_conflicts(&forward), detect_conflicts(&shuffled));
    }

    #[test]
    fn test_identical_check_ins_tie_break_by_id() {
        let items = vec![
            stay("b", "Thornybush", (3, 1), (3, 4)),
            stay("a", "Sabi Sands", (3, 1), (3, 3)),
        ];
        let conflicts = detect_conflicts(&items);
        // "a" sorts first, its check-out (Mar 3) is after "b"'s check-in (Mar 1)
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].items, ("a".to_string(), "b".to_string()));
    }

    #[test]
    fn test_idempotent_over_unchanged_input() {
        let items = vec![
            stay("a", "Sabi Sands", (3, 1), (3, 5)),
            stay("b", "Thornybush", (3, 3), (3, 8)),
            stay("c", "Madikwe", (3, 14), (3, 16)),
        ];
        assert_eq!(detect_conflicts(&items), detect_conflicts(&items));
    }

    #[test]
    fn test_mixed_conflicts_in_sorted_order() {
        let items = vec![
            stay("a", "Sabi Sands", (3, 1), (3, 5)),
            stay("b", "Thornybush", (3, 3), (3, 8)),
            stay("c", "Madikwe", (3, 14), (3, 16)),
        ];
        let conflicts = detect_conflicts(&items);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].kind, ConflictKind::Overlap);
        assert_eq!(conflicts[1].kind, ConflictKind::Gap { days: 6 });
    }
}
