//! Calendar heat-map aggregation.
//!
//! Days bucket by the UTC calendar day of trade **exit** (a trade's
//! result lands on the day it was realized). Intensity normalizes a
//! day's absolute P/L against the largest daily magnitude across the
//! whole history, so a month view and an all-time view shade
//! consistently.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constants::HUNDRED;
use super::resolved_with_pnl;
use crate::journal::Trade;

/// A year/month pair identifying one calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

impl CalendarMonth {
    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The previous calendar month.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next calendar month.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Aggregate result for one realized trading day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    /// UTC calendar day of trade exit.
    pub date: NaiveDate,
    /// Summed net P/L realized on this day.
    pub pnl: Decimal,
    /// Number of trades closed on this day.
    pub trades: u64,
    /// Trades with strictly positive P/L.
    pub wins: u64,
    /// Trades with zero or negative P/L.
    pub losses: u64,
}

/// Totals for the month a report was built for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Summed net P/L of the month's trading days.
    pub pnl: Decimal,
    /// Trades closed during the month.
    pub trades: u64,
    /// Whole-percent win rate over the month's trades.
    pub win_rate: Decimal,
    /// Days with at least one closed trade.
    pub trading_days: u64,
}

/// Calendar heat-map data with global shading bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarReport {
    /// Every realized trading day in the history, keyed by date.
    pub days: BTreeMap<NaiveDate, CalendarDay>,
    /// Highest single-day P/L across the whole history.
    pub max_daily_pnl: Decimal,
    /// Lowest single-day P/L across the whole history.
    pub min_daily_pnl: Decimal,
    /// The month the summary covers.
    pub month: CalendarMonth,
    /// Totals for that month.
    pub summary: MonthSummary,
}

impl CalendarReport {
    /// Shading intensity for a day's P/L, in `[0, 1]`.
    ///
    /// Normalizes against the larger of the global extremes, with a floor
    /// of one so an all-quiet history doesn't divide by zero.
    #[must_use]
    pub fn intensity(&self, pnl: Decimal) -> Decimal {
        let scale = self
            .max_daily_pnl
            .abs()
            .max(self.min_daily_pnl.abs())
            .max(Decimal::ONE);
        (pnl.abs() / scale).min(Decimal::ONE)
    }
}

/// Bucket trades into realized-day cells and summarize `month`.
#[must_use]
pub fn build_calendar(trades: &[Trade], month: CalendarMonth) -> CalendarReport {
    let mut days: BTreeMap<NaiveDate, CalendarDay> = BTreeMap::new();

    for (trade, pnl) in resolved_with_pnl(trades) {
        let date = trade
            .exit_time
            .unwrap_or(trade.entry_time)
            .date_naive();
        let day = days.entry(date).or_insert(CalendarDay {
            date,
            pnl: Decimal::ZERO,
            trades: 0,
            wins: 0,
            losses: 0,
        });
        day.pnl += pnl;
        day.trades += 1;
        if pnl > Decimal::ZERO {
            day.wins += 1;
        } else {
            day.losses += 1;
        }
    }

    let mut max_daily_pnl = Decimal::ZERO;
    let mut min_daily_pnl = Decimal::ZERO;
    for day in days.values() {
        max_daily_pnl = max_daily_pnl.max(day.pnl);
        min_daily_pnl = min_daily_pnl.min(day.pnl);
    }

    let summary = summarize_month(&days, month);

    CalendarReport {
        days,
        max_daily_pnl,
        min_daily_pnl,
        month,
        summary,
    }
}

fn summarize_month(days: &BTreeMap<NaiveDate, CalendarDay>, month: CalendarMonth) -> MonthSummary {
    let mut pnl = Decimal::ZERO;
    let mut trades = 0u64;
    let mut wins = 0u64;
    let mut trading_days = 0u64;

    for day in days.values().filter(|d| month.contains(d.date)) {
        pnl += day.pnl;
        trades += day.trades;
        wins += day.wins;
        trading_days += 1;
    }

    let win_rate = if trades == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(wins) / Decimal::from(trades) * HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };

    MonthSummary {
        pnl,
        trades,
        win_rate,
        trading_days,
    }
}
