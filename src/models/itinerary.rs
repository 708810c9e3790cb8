//! Itinerary stay items
//!
//! A stay item is one hotel booking's check-in/check-out span. Date ranges
//! are validated at construction and on every edit so the conflict detector
//! can assume check-out is strictly after check-in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::LodgeDeskError;

/// A single hotel stay on the itinerary timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    /// Unique key within the itinerary
    pub id: String,
    pub hotel_name: String,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Derived night count, kept in sync with the date span
    pub nights: i64,
    pub guests: u32,
    /// Nightly rate in the agency's base currency
    pub rate: f64,
}

impl ItineraryItem {
    /// Create a stay item, rejecting spans where check-out is not strictly
    /// after check-in.
    pub fn new(
        id: impl Into<String>,
        hotel_name: impl Into<String>,
        location: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        rate: f64,
    ) -> Result<Self, LodgeDeskError> {
        let nights = night_count(check_in, check_out)?;
        Ok(Self {
            id: id.into(),
            hotel_name: hotel_name.into(),
            location: location.into(),
            check_in,
            check_out,
            nights,
            guests,
            rate,
        })
    }

    /// Update the date span, recomputing the night count.
    pub fn set_dates(
        &mut self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<(), LodgeDeskError> {
        self.nights = night_count(check_in, check_out)?;
        self.check_in = check_in;
        self.check_out = check_out;
        Ok(())
    }
}

fn night_count(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64, LodgeDeskError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(LodgeDeskError::validation(format!(
            "check-out {check_out} must be after check-in {check_in}"
        )));
    }
    Ok(nights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights_derived_from_span() {
        let item = ItineraryItem::new(
            "1",
            "Sabi Sands Safari Lodge",
            "Kruger National Park",
            date(2025, 3, 15),
            date(2025, 3, 18),
            2,
            520.0,
        )
        .unwrap();
        assert_eq!(item.nights, 3);
    }

    #[test]
    fn test_inverted_span_rejected() {
        let result = ItineraryItem::new(
            "1",
            "Sabi Sands Safari Lodge",
            "Kruger National Park",
            date(2025, 3, 18),
            date(2025, 3, 15),
            2,
            520.0,
        );
        assert!(matches!(result, Err(LodgeDeskError::Validation { .. })));
    }

    #[test]
    fn test_zero_night_span_rejected() {
        let result = ItineraryItem::new(
            "1",
            "Thornybush Game Lodge",
            "Thornybush Reserve",
            date(2025, 3, 20),
            date(2025, 3, 20),
            2,
            480.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_set_dates_recomputes_nights() {
        let mut item = ItineraryItem::new(
            "2",
            "Thornybush Game Lodge",
            "Thornybush Reserve",
            date(2025, 3, 20),
            date(2025, 3, 23),
            2,
            480.0,
        )
        .unwrap();

        item.set_dates(date(2025, 3, 20), date(2025, 3, 27)).unwrap();
        assert_eq!(item.nights, 7);

        // Invalid edit leaves the item untouched
        let err = item.set_dates(date(2025, 3, 27), date(2025, 3, 20));
        assert!(err.is_err());
        assert_eq!(item.nights, 7);
        assert_eq!(item.check_in, date(2025, 3, 20));
    }
}
