//! Currency metadata and display formatting

use serde::Serialize;

/// A currency supported by the commission calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// The currency set the agency quotes in. Rates are anchored to whichever of
/// these is configured as the base currency.
pub fn supported_currencies() -> &'static [Currency] {
    &[
        Currency {
            code: "ZAR",
            symbol: "R",
            name: "South African Rand",
        },
        Currency {
            code: "USD",
            symbol: "$",
            name: "US Dollar",
        },
        Currency {
            code: "GBP",
            symbol: "£",
            name: "British Pound",
        },
        Currency {
            code: "EUR",
            symbol: "€",
            name: "Euro",
        },
    ]
}

/// Look up a supported currency by code.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    supported_currencies().iter().find(|c| c.code == code)
}

impl Currency {
    /// Format a whole-unit amount with the currency symbol and thousands
    /// separators, e.g. `R 11,875`.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        let rounded = amount.round() as i64;
        let sign = if rounded < 0 { "-" } else { "" };
        let digits = rounded.unsigned_abs().to_string();

        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{sign}{} {grouped}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_supported_set() {
        let codes: Vec<&str> = supported_currencies().iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["ZAR", "USD", "GBP", "EUR"]);
    }

    #[test]
    fn test_find_currency() {
        assert_eq!(find_currency("USD").unwrap().symbol, "$");
        assert!(find_currency("JPY").is_none());
    }

    #[rstest]
    #[case(0.0, "R 0")]
    #[case(520.0, "R 520")]
    #[case(11_875.0, "R 11,875")]
    #[case(1_234_567.4, "R 1,234,567")]
    #[case(-2375.0, "-R 2,375")]
    fn test_format(#[case] amount: f64, #[case] expected: &str) {
        let zar = find_currency("ZAR").unwrap();
        assert_eq!(zar.format(amount), expected);
    }
}
