//! Trade analytics engine.
//!
//! Pure computation over journaled trade snapshots. Nothing in here
//! performs I/O or mutates a trade; every aggregate is derived on demand
//! from the slice it is handed. All money math is [`rust_decimal`] with
//! half-away-from-zero rounding applied once at the edge of each
//! calculation, never on intermediates.

pub mod breakdown;
pub mod calendar;
pub mod constants;
pub mod equity;
pub mod format;
pub mod metrics;
pub mod stats;
pub mod streaks;

pub use breakdown::{
    emotion_breakdown, mistake_report, pair_breakdown, pair_distribution, session_breakdown,
    setup_breakdown, GroupBreakdown, MistakeReport,
};
pub use calendar::{build_calendar, CalendarDay, CalendarMonth, CalendarReport, MonthSummary};
pub use equity::{build_equity_curve, EquityCurve, EquityPoint};
pub use metrics::{pips, profit_loss, r_multiple, trading_session, TradingSession};
pub use stats::{compute_stats, TradeStats};
pub use streaks::{track_streaks, DailyResult, DayOutcome, StreakReport};

use rust_decimal::Decimal;

use crate::journal::{Trade, TradeStatus};

/// Iterate the resolved trades of a slice together with their net P/L.
///
/// This is the single eligibility gate every aggregator goes through:
/// a trade counts only when it is closed *and* carries an exit price.
/// Trades marked closed without one are upstream data inconsistencies
/// and are skipped, not errored.
pub(crate) fn resolved_with_pnl(trades: &[Trade]) -> impl Iterator<Item = (&Trade, Decimal)> {
    trades.iter().filter_map(|trade| {
        if trade.status == TradeStatus::Closed && trade.exit_price.is_none() {
            tracing::debug!(trade_id = %trade.id, "closed trade without exit price, skipping");
        }
        if !trade.is_resolved() {
            return None;
        }
        trade.profit_loss().map(|pnl| (trade, pnl))
    })
}
