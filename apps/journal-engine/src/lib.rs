// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Journal Engine - Trade Analytics Core Library
//!
//! Pure-computation analytics for a forex/CFD trading journal. The engine
//! takes read-only snapshots of journaled trades and derives everything a
//! journal surface displays:
//!
//! - **Per-trade metrics**: pips, net P/L, R-multiple, trading session
//! - **Aggregate statistics**: win rate, profit factor, expectancy
//! - **Equity curve**: running balance with an optional clean comparison
//! - **Streaks**: winning and losing day runs, bucketed by entry day
//! - **Calendar**: per-day heat-map cells, bucketed by exit day
//! - **Breakdowns**: performance sliced by session, setup, emotion, pair
//!
//! All money math uses [`rust_decimal`]. The engine performs no I/O beyond
//! the trade log and config loaders; persistence and presentation live
//! elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Analytics computations over trade snapshots.
pub mod analytics;

/// Configuration loading and validation.
pub mod config;

/// Boundary error types.
pub mod error;

/// Trade domain model and catalogs.
pub mod journal;

#[cfg(test)]
mod testutil;

pub use analytics::{
    build_calendar, build_equity_curve, compute_stats, track_streaks, CalendarReport, EquityCurve,
    StreakReport, TradeStats, TradingSession,
};
pub use config::{load_config, Config};
pub use error::JournalError;
pub use journal::{load_trade_log, CurrencyPair, Direction, Trade, TradeStatus};
