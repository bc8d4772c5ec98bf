//! Journal domain model: trade records, instrument identifiers, catalogs.

pub mod catalog;
mod pair;
mod trade;

pub use pair::CurrencyPair;
pub use trade::{Direction, Trade, TradeStatus};

use crate::error::JournalError;

/// Load a trade log from a JSON file containing an array of trades.
///
/// # Errors
///
/// Returns a `JournalError` if the file cannot be read or parsed.
pub fn load_trade_log(path: &str) -> Result<Vec<Trade>, JournalError> {
    let contents = std::fs::read_to_string(path).map_err(|e| JournalError::TradeLogRead {
        path: path.to_string(),
        source: e,
    })?;
    let trades: Vec<Trade> = serde_json::from_str(&contents)?;
    Ok(trades)
}
