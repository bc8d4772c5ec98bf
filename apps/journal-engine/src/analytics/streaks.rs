//! Winning and losing day-streak tracking.
//!
//! Trades bucket by their **entry** date (a streak reflects the days a
//! decision was made, unlike the calendar view which buckets by exit date).
//! A day's outcome is the sign of its summed P/L; break-even days reset
//! both running streaks without starting one of their own.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::resolved_with_pnl;
use crate::journal::Trade;

/// Outcome classification of a trading day (or the current streak).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOutcome {
    /// Positive summed P/L.
    Profit,
    /// Negative summed P/L.
    Loss,
    /// Exactly break-even (or no current streak).
    Neutral,
}

/// Aggregate result for one trading day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResult {
    /// UTC calendar day of trade entry.
    pub date: NaiveDate,
    /// Summed net P/L of the day's trades.
    pub pnl: Decimal,
    /// Number of resolved trades entered that day.
    pub trades: u64,
}

impl DailyResult {
    /// The day's outcome from the sign of its P/L.
    #[must_use]
    pub fn outcome(&self) -> DayOutcome {
        if self.pnl > Decimal::ZERO {
            DayOutcome::Profit
        } else if self.pnl < Decimal::ZERO {
            DayOutcome::Loss
        } else {
            DayOutcome::Neutral
        }
    }
}

/// Streak snapshot over the full trading-day history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakReport {
    /// Length of the streak ending on the most recent trading day.
    pub current_streak: u64,
    /// Kind of the current streak; `Neutral` when the most recent day
    /// broke even (current streak 0).
    pub current_kind: DayOutcome,
    /// First day of the current streak, when one exists.
    pub current_streak_start: Option<NaiveDate>,
    /// Longest run of profitable days.
    pub longest_win_streak: u64,
    /// Longest run of losing days.
    pub longest_loss_streak: u64,
    /// Total count of profitable days.
    pub profitable_days: u64,
    /// Total count of losing days.
    pub losing_days: u64,
    /// Every trading day in ascending date order. Consumers slice this
    /// for views like "last 14 days".
    pub daily: Vec<DailyResult>,
}

impl Default for StreakReport {
    fn default() -> Self {
        Self {
            current_streak: 0,
            current_kind: DayOutcome::Neutral,
            current_streak_start: None,
            longest_win_streak: 0,
            longest_loss_streak: 0,
            profitable_days: 0,
            losing_days: 0,
            daily: Vec::new(),
        }
    }
}

/// Bucket trades by entry day and scan for streaks.
#[must_use]
pub fn track_streaks(trades: &[Trade]) -> StreakReport {
    let mut days: BTreeMap<NaiveDate, DailyResult> = BTreeMap::new();

    for (trade, pnl) in resolved_with_pnl(trades) {
        let date = trade.entry_time.date_naive();
        days.entry(date)
            .and_modify(|day| {
                day.pnl += pnl;
                day.trades += 1;
            })
            .or_insert(DailyResult {
                date,
                pnl,
                trades: 1,
            });
    }

    let daily: Vec<DailyResult> = days.into_values().collect();
    if daily.is_empty() {
        return StreakReport::default();
    }

    let mut longest_win_streak = 0u64;
    let mut longest_loss_streak = 0u64;
    let mut running_wins = 0u64;
    let mut running_losses = 0u64;
    let mut profitable_days = 0u64;
    let mut losing_days = 0u64;

    for day in &daily {
        match day.outcome() {
            DayOutcome::Profit => {
                profitable_days += 1;
                running_wins += 1;
                running_losses = 0;
                longest_win_streak = longest_win_streak.max(running_wins);
            }
            DayOutcome::Loss => {
                losing_days += 1;
                running_losses += 1;
                running_wins = 0;
                longest_loss_streak = longest_loss_streak.max(running_losses);
            }
            DayOutcome::Neutral => {
                // A break-even day breaks both streaks.
                running_wins = 0;
                running_losses = 0;
            }
        }
    }

    let (current_streak, current_kind, current_streak_start) = current_streak(&daily);

    StreakReport {
        current_streak,
        current_kind,
        current_streak_start,
        longest_win_streak,
        longest_loss_streak,
        profitable_days,
        losing_days,
        daily,
    }
}

/// Walk backward from the most recent day counting consecutive days of
/// its outcome. A neutral most-recent day means no current streak.
fn current_streak(daily: &[DailyResult]) -> (u64, DayOutcome, Option<NaiveDate>) {
    let Some(last) = daily.last() else {
        return (0, DayOutcome::Neutral, None);
    };

    let kind = last.outcome();
    if kind == DayOutcome::Neutral {
        return (0, DayOutcome::Neutral, None);
    }

    let mut length = 0u64;
    let mut start = last.date;
    for day in daily.iter().rev() {
        if day.outcome() == kind {
            length += 1;
            start = day.date;
        } else {
            break;
        }
    }

    (length, kind, Some(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::day_trade;

    #[test]
    fn test_empty_report() {
        let report = track_streaks(&[]);
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.current_kind, DayOutcome::Neutral);
        assert!(report.daily.is_empty());
    }

    #[test]
    fn test_break_even_day_resets_both_streaks() {
        // win, win, break-even, loss
        let trades = vec![
            day_trade("t1", (2026, 3, 2), 50),
            day_trade("t2", (2026, 3, 3), 30),
            day_trade("t3", (2026, 3, 4), 0),
            day_trade("t4", (2026, 3, 5), -20),
        ];
        let report = track_streaks(&trades);
        assert_eq!(report.longest_win_streak, 2);
        assert_eq!(report.longest_loss_streak, 1);
        assert_eq!(report.current_streak, 1);
        assert_eq!(report.current_kind, DayOutcome::Loss);
        assert_eq!(report.profitable_days, 2);
        assert_eq!(report.losing_days, 1);
    }

    #[test]
    fn test_day_outcome_uses_summed_pnl() {
        // A 50-pip win and an 80-pip loss on the same day net to a loss day.
        let trades = vec![
            day_trade("t1", (2026, 3, 2), 50),
            day_trade("t2", (2026, 3, 2), -80),
        ];
        let report = track_streaks(&trades);
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.daily[0].trades, 2);
        assert_eq!(report.daily[0].outcome(), DayOutcome::Loss);
        assert_eq!(report.losing_days, 1);
    }

    #[test]
    fn test_current_streak_start_date() {
        let trades = vec![
            day_trade("t1", (2026, 3, 2), -10),
            day_trade("t2", (2026, 3, 3), 40),
            day_trade("t3", (2026, 3, 4), 25),
        ];
        let report = track_streaks(&trades);
        assert_eq!(report.current_streak, 2);
        assert_eq!(report.current_kind, DayOutcome::Profit);
        assert_eq!(
            report.current_streak_start,
            chrono::NaiveDate::from_ymd_opt(2026, 3, 3)
        );
    }

    #[test]
    fn test_neutral_latest_day_means_no_current_streak() {
        let trades = vec![
            day_trade("t1", (2026, 3, 2), 40),
            day_trade("t2", (2026, 3, 3), 0),
        ];
        let report = track_streaks(&trades);
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.current_kind, DayOutcome::Neutral);
        assert_eq!(report.current_streak_start, None);
    }
}
