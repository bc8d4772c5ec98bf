//! Error types for the journal engine.
//!
//! The analytics computations themselves are total and never fail. Errors
//! only arise at the edges, when validating instrument identifiers and
//! loading trade logs from disk.

use thiserror::Error;

/// Errors produced at the journal engine's boundaries.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Instrument identifier is not a valid `BASE/QUOTE` pair.
    #[error("invalid currency pair '{pair}': {reason}")]
    InvalidPair {
        /// The rejected identifier.
        pair: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to read a trade log file.
    #[error("failed to read trade log '{path}': {source}")]
    TradeLogRead {
        /// Path to the trade log.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse a trade log as JSON.
    #[error("failed to parse trade log: {0}")]
    TradeLogParse(#[from] serde_json::Error),
}
