//! Supplier contract models
//!
//! Contracts are static agency data: a rate card split into calendar-quarter
//! seasons, a list of categorised terms, and any running special offers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar-quarter season used by supplier rate cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    JanMar,
    AprJun,
    JulSep,
    OctDec,
}

impl Season {
    /// The season a given date falls into.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        match date.month() {
            1..=3 => Season::JanMar,
            4..=6 => Season::AprJun,
            7..=9 => Season::JulSep,
            _ => Season::OctDec,
        }
    }

    pub fn all() -> [Season; 4] {
        [Season::JanMar, Season::AprJun, Season::JulSep, Season::OctDec]
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Season::JanMar => "Jan-Mar",
            Season::AprJun => "Apr-Jun",
            Season::JulSep => "Jul-Sep",
            Season::OctDec => "Oct-Dec",
        }
    }
}

/// Room type a contracted rate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Child,
}

/// Per-person nightly rates for one season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomRates {
    pub single: f64,
    pub double: f64,
    pub child: f64,
}

impl RoomRates {
    #[must_use]
    pub fn rate(&self, room_type: RoomType) -> f64 {
        match room_type {
            RoomType::Single => self.single,
            RoomType::Double => self.double,
            RoomType::Child => self.child,
        }
    }
}

/// How a contract term should be surfaced to an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// Routine contractual language
    Standard,
    /// Discount or partnership the agent should exploit
    Opportunity,
    /// Penalty, supplement, or clause that can burn a client
    Warning,
}

/// One clause of a supplier contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractTerm {
    pub id: u32,
    /// Free-form grouping such as "rates", "cancellation", "payment"
    pub category: String,
    pub text: String,
    /// Whether the clause matters for day-to-day quoting
    pub relevant: bool,
    pub kind: TermKind,
}

/// A running promotion attached to a contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub title: String,
    pub description: String,
    pub valid_period: String,
    pub conditions: String,
}

/// A supplier hotel contract with its seasonal rate card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelContract {
    pub hotel_name: String,
    pub contract_number: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    /// Rate card entries in season order (Jan-Mar first)
    pub rate_card: Vec<(Season, RoomRates)>,
    pub terms: Vec<ContractTerm>,
    pub special_offers: Vec<SpecialOffer>,
}

impl HotelContract {
    /// Rates for the season a date falls into. Rate cards always carry all
    /// four seasons, so a miss means malformed seed data.
    #[must_use]
    pub fn season_rates(&self, date: NaiveDate) -> Option<&RoomRates> {
        let season = Season::for_date(date);
        self.rate_card
            .iter()
            .find(|(s, _)| *s == season)
            .map(|(_, rates)| rates)
    }

    /// The contracted nightly rate for a room type on a given date.
    #[must_use]
    pub fn rate_on(&self, date: NaiveDate, room_type: RoomType) -> Option<f64> {
        self.season_rates(date).map(|r| r.rate(room_type))
    }

    /// Terms flagged as relevant for day-to-day quoting.
    pub fn relevant_terms(&self) -> impl Iterator<Item = &ContractTerm> {
        self.terms.iter().filter(|t| t.relevant)
    }

    /// Terms an agent must warn the client about.
    pub fn warning_terms(&self) -> impl Iterator<Item = &ContractTerm> {
        self.terms.iter().filter(|t| t.kind == TermKind::Warning)
    }

    /// Whether the contract covers a date.
    #[must_use]
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.valid_from && date <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Season::JanMar)]
    #[case(3, Season::JanMar)]
    #[case(4, Season::AprJun)]
    #[case(6, Season::AprJun)]
    #[case(7, Season::JulSep)]
    #[case(9, Season::JulSep)]
    #[case(10, Season::OctDec)]
    #[case(12, Season::OctDec)]
    fn test_season_for_month(#[case] month: u32, #[case] expected: Season) {
        let date = NaiveDate::from_ymd_opt(2025, month, 15).unwrap();
        assert_eq!(Season::for_date(date), expected);
    }

    #[test]
    fn test_room_rates_lookup() {
        let rates = RoomRates {
            single: 480.0,
            double: 520.0,
            child: 260.0,
        };
        assert_eq!(rates.rate(RoomType::Single), 480.0);
        assert_eq!(rates.rate(RoomType::Double), 520.0);
        assert_eq!(rates.rate(RoomType::Child), 260.0);
    }
}
