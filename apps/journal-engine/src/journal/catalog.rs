//! Constant catalogs for the journal.
//!
//! These mirror the tag vocabularies offered by the trade entry form. They
//! are plain constants rather than hidden globals so aggregators can be
//! tested against substitute catalogs.

/// Currency pairs offered by the trade entry form.
pub const CURRENCY_PAIRS: &[&str] = &[
    "EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF",
    "AUD/USD", "USD/CAD", "NZD/USD", "EUR/GBP",
    "EUR/JPY", "GBP/JPY", "AUD/JPY", "EUR/AUD",
    "EUR/CAD", "GBP/AUD", "GBP/CAD", "XAU/USD",
];

/// Setup / strategy tags.
pub const SETUPS: &[&str] = &[
    "Breakout", "FVG", "Order Block", "Trend Continuation",
    "Reversal", "Support/Resistance", "Fibonacci", "Supply/Demand",
    "Liquidity Grab", "ICT", "SMC", "Elliott Wave",
];

/// Emotion tags, positive and negative.
pub const EMOTIONS: &[&str] = &[
    "Disciplined", "Confident", "Patient",
    "FOMO", "Greedy", "Fearful", "Revenge Trading",
    "Overconfident", "Impulsive", "Rule Break",
];

/// Emotion tags classified as mistakes for what-if analysis.
pub const NEGATIVE_EMOTIONS: &[&str] = &[
    "FOMO", "Greedy", "Fearful", "Revenge Trading",
    "Overconfident", "Impulsive", "Rule Break",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_emotions_are_a_subset_of_emotions() {
        for tag in NEGATIVE_EMOTIONS {
            assert!(EMOTIONS.contains(tag), "{tag} missing from EMOTIONS");
        }
    }

    #[test]
    fn test_catalog_pairs_all_validate() {
        for raw in CURRENCY_PAIRS {
            assert!(crate::journal::CurrencyPair::new(*raw).is_ok());
        }
    }
}
