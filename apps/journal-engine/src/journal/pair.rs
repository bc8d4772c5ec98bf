//! Currency pair value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::JournalError;

/// A validated currency pair in `BASE/QUOTE` form.
///
/// Examples:
/// - Major: "EUR/USD", "GBP/JPY"
/// - Metal: "XAU/USD"
///
/// Each side is 2-5 uppercase ASCII letters. Input is normalized to
/// uppercase before validation, so `eur/usd` is accepted.
///
/// The metric functions in [`crate::analytics`] deliberately accept raw
/// strings and stay total for malformed pairs; this type is for the edges
/// that want validation up front (trade entry, catalogs, CLI input).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// Create a new validated pair.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::InvalidPair`] if the input is not
    /// `BASE/QUOTE` with 2-5 letters per side.
    pub fn new(value: impl Into<String>) -> Result<Self, JournalError> {
        let normalized = value.into().to_uppercase();

        let Some((base, quote)) = normalized.split_once('/') else {
            return Err(JournalError::InvalidPair {
                pair: normalized,
                reason: "missing '/' separator".to_string(),
            });
        };

        for (label, side) in [("base", base), ("quote", quote)] {
            if !(2..=5).contains(&side.len()) || !side.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(JournalError::InvalidPair {
                    pair: normalized.clone(),
                    reason: format!("{label} currency must be 2-5 letters"),
                });
            }
        }

        Ok(Self(normalized))
    }

    /// Get the pair string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The base (left-hand) currency, e.g. "EUR" for "EUR/USD".
    #[must_use]
    pub fn base(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    /// The quote (right-hand) currency, e.g. "USD" for "EUR/USD".
    #[must_use]
    pub fn quote(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or("")
    }

    /// Whether either side of the pair is JPY.
    ///
    /// JPY pairs quote to 3 decimal places, so their pip sits at the 2nd
    /// decimal instead of the 4th.
    #[must_use]
    pub fn contains_jpy(&self) -> bool {
        self.0.contains("JPY")
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pairs() {
        for raw in ["EUR/USD", "XAU/USD", "GBP/JPY", "eur/usd"] {
            let pair = CurrencyPair::new(raw).expect("pair should validate");
            assert_eq!(pair.as_str(), raw.to_uppercase());
        }
    }

    #[test]
    fn test_base_and_quote() {
        let pair = CurrencyPair::new("EUR/USD").expect("pair should validate");
        assert_eq!(pair.base(), "EUR");
        assert_eq!(pair.quote(), "USD");
    }

    #[test]
    fn test_jpy_detection() {
        let jpy = CurrencyPair::new("USD/JPY").expect("pair should validate");
        assert!(jpy.contains_jpy());

        let non_jpy = CurrencyPair::new("EUR/USD").expect("pair should validate");
        assert!(!non_jpy.contains_jpy());
    }

    #[test]
    fn test_missing_separator_rejected() {
        let err = CurrencyPair::new("EURUSD").unwrap_err();
        assert!(matches!(err, JournalError::InvalidPair { .. }));
    }

    #[test]
    fn test_bad_side_lengths_rejected() {
        assert!(CurrencyPair::new("E/USD").is_err());
        assert!(CurrencyPair::new("EURUSD/X").is_err());
        assert!(CurrencyPair::new("EU1/USD").is_err());
    }
}
