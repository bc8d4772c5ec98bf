//! The trade record and its lifecycle enums.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::metrics;
use crate::analytics::TradingSession;

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Bought the base currency.
    Long,
    /// Sold the base currency.
    Short,
}

/// Trade lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    /// Position is still open.
    Open,
    /// Position has been exited.
    Closed,
}

/// A single journaled trade.
///
/// Trades are created and mutated by the persistence layer; the engine only
/// ever receives read-only snapshots and derives metrics from them. All
/// derived values (pips, P/L, R-multiple, session) are recomputed on demand
/// and never stored back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Instrument in `BASE/QUOTE` form, e.g. "EUR/USD".
    pub pair: String,
    /// Position direction.
    pub direction: Direction,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price; absent while the trade is open.
    pub exit_price: Option<Decimal>,
    /// Stop-loss price.
    pub stop_loss: Decimal,
    /// Take-profit price, if one was planned.
    pub take_profit: Option<Decimal>,
    /// Position size in standard lots.
    pub lot_size: Decimal,
    /// Commission paid, account currency.
    #[serde(default)]
    pub commission: Decimal,
    /// Entry timestamp.
    pub entry_time: DateTime<Utc>,
    /// Exit timestamp; absent while the trade is open.
    pub exit_time: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: TradeStatus,
    /// Setup / strategy tags.
    #[serde(default)]
    pub setups: Vec<String>,
    /// Emotion tags.
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Freeform notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Storage reference for the pre-trade screenshot.
    #[serde(default)]
    pub before_screenshot: Option<String>,
    /// Storage reference for the post-trade screenshot.
    #[serde(default)]
    pub after_screenshot: Option<String>,
    /// Row creation timestamp. Not consumed by the engine.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Row update timestamp. Not consumed by the engine.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trade {
    /// Whether this trade is eligible for financial aggregation.
    ///
    /// Requires both a closed status and a present exit price. The two can
    /// disagree in upstream data; a trade only counts when both hold.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == TradeStatus::Closed && self.exit_price.is_some()
    }

    /// Realized pips, or `None` while the trade is open.
    #[must_use]
    pub fn pips(&self) -> Option<Decimal> {
        self.exit_price
            .map(|exit| metrics::pips(&self.pair, self.entry_price, exit, self.direction))
    }

    /// Realized net P/L in account currency, or `None` while open.
    #[must_use]
    pub fn profit_loss(&self) -> Option<Decimal> {
        self.exit_price.map(|exit| {
            metrics::profit_loss(
                &self.pair,
                self.entry_price,
                exit,
                self.lot_size,
                self.direction,
                self.commission,
            )
        })
    }

    /// Realized R-multiple, or `None` while open.
    #[must_use]
    pub fn r_multiple(&self) -> Option<Decimal> {
        self.exit_price
            .map(|exit| metrics::r_multiple(self.entry_price, exit, self.stop_loss, self.direction))
    }

    /// Trading session the trade was entered in.
    #[must_use]
    pub fn session(&self) -> TradingSession {
        metrics::trading_session(self.entry_time)
    }

    /// Whether the trade carries any of the given emotion tags.
    #[must_use]
    pub fn tagged_with_any(&self, tags: &[String]) -> bool {
        self.emotions.iter().any(|e| tags.contains(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn closed_trade(exit_price: Option<Decimal>, status: TradeStatus) -> Trade {
        Trade {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            pair: "EUR/USD".to_string(),
            direction: Direction::Long,
            entry_price: dec!(1.1000),
            exit_price,
            stop_loss: dec!(1.0950),
            take_profit: None,
            lot_size: dec!(1.0),
            commission: Decimal::ZERO,
            entry_time: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
            exit_time: exit_price
                .map(|_| Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap()),
            status,
            setups: vec![],
            emotions: vec![],
            notes: None,
            before_screenshot: None,
            after_screenshot: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_resolved_requires_both_status_and_exit() {
        assert!(closed_trade(Some(dec!(1.1050)), TradeStatus::Closed).is_resolved());
        assert!(!closed_trade(None, TradeStatus::Closed).is_resolved());
        assert!(!closed_trade(Some(dec!(1.1050)), TradeStatus::Open).is_resolved());
    }

    #[test]
    fn test_derived_metrics_absent_while_open() {
        let open = closed_trade(None, TradeStatus::Open);
        assert_eq!(open.pips(), None);
        assert_eq!(open.profit_loss(), None);
        assert_eq!(open.r_multiple(), None);
    }

    #[test]
    fn test_derived_metrics_for_closed_trade() {
        let trade = closed_trade(Some(dec!(1.1050)), TradeStatus::Closed);
        assert_eq!(trade.pips(), Some(dec!(50.0)));
        assert_eq!(trade.profit_loss(), Some(dec!(500.00)));
        assert_eq!(trade.r_multiple(), Some(dec!(1.00)));
    }
}
