//! Rate tables and currency conversion
//!
//! All stored rates are anchored to a single base currency; converting
//! between two non-base currencies routes through the base. Conversion never
//! fails: a missing rate degrades to passing the amount through unchanged,
//! but the outcome says so, so callers can tell a real conversion from a
//! fallback.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One stored exchange rate, from the base currency to a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from: String,
    pub to: String,
    pub rate: f64,
    /// When the rate was fetched, epoch milliseconds
    pub timestamp: i64,
}

/// Outcome of a conversion; the amount is always usable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "amount")]
pub enum Conversion {
    /// A rate was applied
    Converted(f64),
    /// Source and target are the same currency
    SameCurrency(f64),
    /// A needed rate was missing; the amount passed through unchanged
    Unavailable(f64),
}

impl Conversion {
    /// The resulting amount regardless of outcome.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match *self {
            Conversion::Converted(v) | Conversion::SameCurrency(v) | Conversion::Unavailable(v) => {
                v
            }
        }
    }

    /// Whether a rate was actually applied.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        matches!(self, Conversion::Converted(_))
    }
}

/// Exchange rates anchored to one base currency
///
/// Replaced wholesale on every successful fetch; never merged partially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, ExchangeRate>,
}

impl RateTable {
    /// An empty table anchored at `base`; every non-identity conversion
    /// degrades to `Unavailable`.
    #[must_use]
    pub fn empty(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            rates: HashMap::new(),
        }
    }

    /// Build a table from stored rates. Entries whose `from` differs from
    /// `base` are dropped; a table never mixes anchors.
    #[must_use]
    pub fn new(base: impl Into<String>, rates: HashMap<String, ExchangeRate>) -> Self {
        let base = base.into();
        let rates = rates
            .into_iter()
            .filter(|(_, rate)| rate.from == base)
            .collect();
        Self { base, rates }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn rates(&self) -> &HashMap<String, ExchangeRate> {
        &self.rates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// The base→code rate, if stored.
    #[must_use]
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).map(|r| r.rate)
    }

    /// Convert an amount between two currency codes.
    #[must_use]
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Conversion {
        if from == to {
            return Conversion::SameCurrency(amount);
        }

        if from == self.base {
            return match self.rate_for(to) {
                Some(rate) => Conversion::Converted(amount * rate),
                None => Conversion::Unavailable(amount),
            };
        }

        if to == self.base {
            return match self.rate_for(from) {
                Some(rate) => Conversion::Converted(amount / rate),
                None => Conversion::Unavailable(amount),
            };
        }

        // Neither side is the base: route through it
        match (self.rate_for(from), self.rate_for(to)) {
            (Some(from_rate), Some(to_rate)) => {
                Conversion::Converted(amount / from_rate * to_rate)
            }
            _ => Conversion::Unavailable(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn zar_table() -> RateTable {
        let mut rates = HashMap::new();
        for (code, rate) in [("USD", 0.054), ("GBP", 0.042), ("EUR", 0.049)] {
            rates.insert(
                code.to_string(),
                ExchangeRate {
                    from: "ZAR".to_string(),
                    to: code.to_string(),
                    rate,
                    timestamp: 1_735_000_000_000,
                },
            );
        }
        RateTable::new("ZAR", rates)
    }

    #[rstest]
    #[case("ZAR")]
    #[case("USD")]
    #[case("JPY")] // even an unknown code converts to itself
    fn test_identity(#[case] code: &str) {
        let table = zar_table();
        let conversion = table.convert(250.0, code, code);
        assert_eq!(conversion, Conversion::SameCurrency(250.0));
        assert_eq!(conversion.amount(), 250.0);
    }

    #[test]
    fn test_from_base() {
        let table = zar_table();
        let conversion = table.convert(1000.0, "ZAR", "USD");
        assert_eq!(conversion, Conversion::Converted(54.0));
    }

    #[test]
    fn test_to_base() {
        let table = zar_table();
        let conversion = table.convert(54.0, "USD", "ZAR");
        assert!(conversion.is_converted());
        assert!((conversion.amount() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_rate_routes_through_base() {
        let table = zar_table();
        let conversion = table.convert(100.0, "USD", "EUR");
        // 100 USD -> 1851.85.. ZAR -> 90.74.. EUR
        assert!(conversion.is_converted());
        assert!((conversion.amount() - 100.0 / 0.054 * 0.049).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let table = zar_table();
        let out = table.convert(12_345.0, "ZAR", "GBP").amount();
        let back = table.convert(out, "GBP", "ZAR").amount();
        assert!((back - 12_345.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_rate_degrades_to_unavailable() {
        let table = RateTable::empty("ZAR");
        assert_eq!(
            table.convert(100.0, "USD", "EUR"),
            Conversion::Unavailable(100.0)
        );
        assert_eq!(
            table.convert(100.0, "ZAR", "USD"),
            Conversion::Unavailable(100.0)
        );
        assert_eq!(
            table.convert(100.0, "USD", "ZAR"),
            Conversion::Unavailable(100.0)
        );
    }

    #[test]
    fn test_unknown_base_still_passes_through() {
        // Table anchored at ZAR, conversion between codes it has never seen
        let table = zar_table();
        assert_eq!(
            table.convert(100.0, "JPY", "AUD"),
            Conversion::Unavailable(100.0)
        );
    }

    #[test]
    fn test_mixed_anchor_entries_dropped() {
        let mut rates = HashMap::new();
        rates.insert(
            "USD".to_string(),
            ExchangeRate {
                from: "EUR".to_string(),
                to: "USD".to_string(),
                rate: 1.1,
                timestamp: 0,
            },
        );
        let table = RateTable::new("ZAR", rates);
        assert!(table.is_empty());
    }
}
