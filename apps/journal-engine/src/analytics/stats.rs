//! Aggregate statistics over a filtered trade set.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::constants::HUNDRED;
use super::metrics::round_money;
use super::resolved_with_pnl;
use crate::journal::Trade;

/// Summary statistics for a set of resolved trades.
///
/// Every numeric field is a concrete value: an empty input yields the
/// all-zero snapshot (see [`TradeStats::default`]), never NaN or nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    /// Number of trades that survived filtering.
    pub total_trades: u64,
    /// Winning percentage, 1 decimal place.
    pub win_rate: Decimal,
    /// Gross profit / gross loss, 2 decimal places.
    ///
    /// `None` is the mathematically-infinite case: wins with zero losses.
    /// A set with neither wins nor losses reports `Some(0)`.
    pub profit_factor: Option<Decimal>,
    /// Average winning trade, 2 decimal places. 0 with no wins.
    pub avg_win: Decimal,
    /// Average losing trade as a positive amount, 2 decimal places.
    pub avg_loss: Decimal,
    /// Net P/L across the whole set, 2 decimal places.
    pub total_pnl: Decimal,
    /// Expected P/L per trade under the observed distribution.
    pub expectancy: Decimal,
    /// Largest single-trade P/L.
    pub best_trade: Decimal,
    /// Smallest (most negative) single-trade P/L.
    pub worst_trade: Decimal,
}

impl Default for TradeStats {
    fn default() -> Self {
        Self {
            total_trades: 0,
            win_rate: Decimal::ZERO,
            profit_factor: Some(Decimal::ZERO),
            avg_win: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
            expectancy: Decimal::ZERO,
            best_trade: Decimal::ZERO,
            worst_trade: Decimal::ZERO,
        }
    }
}

impl TradeStats {
    /// Average win to average loss ratio, 2 decimal places.
    ///
    /// `None` when there are no losses to compare against.
    #[must_use]
    pub fn payoff_ratio(&self) -> Option<Decimal> {
        if self.avg_loss > Decimal::ZERO {
            Some(round_money(self.avg_win / self.avg_loss))
        } else {
            None
        }
    }

    /// Win rate required to break even given the observed win/loss sizes,
    /// whole percent. `None` when both averages are zero.
    #[must_use]
    pub fn break_even_win_rate(&self) -> Option<Decimal> {
        let denom = self.avg_win + self.avg_loss;
        if denom > Decimal::ZERO {
            Some(
                (self.avg_loss / denom * HUNDRED)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            )
        } else {
            None
        }
    }

    /// Observed win rate minus the break-even win rate, 1 decimal place.
    #[must_use]
    pub fn edge(&self) -> Option<Decimal> {
        let denom = self.avg_win + self.avg_loss;
        if denom > Decimal::ZERO {
            Some(
                (self.win_rate - self.avg_loss / denom * HUNDRED)
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
            )
        } else {
            None
        }
    }
}

/// Reduce a trade list to summary statistics.
///
/// Only resolved trades count. Trades carrying any of `excluded_emotions`
/// are filtered out first, which is what powers the "what-if without
/// mistakes" view: pass the mistake tags and compare against the
/// unfiltered snapshot.
#[must_use]
pub fn compute_stats(trades: &[Trade], excluded_emotions: &[String]) -> TradeStats {
    let pnls: Vec<Decimal> = resolved_with_pnl(trades)
        .filter(|(trade, _)| !trade.tagged_with_any(excluded_emotions))
        .map(|(_, pnl)| pnl)
        .collect();

    if pnls.is_empty() {
        return TradeStats::default();
    }

    let total = pnls.len() as u64;
    let mut win_count = 0u64;
    let mut loss_count = 0u64;
    let mut total_win_amount = Decimal::ZERO;
    let mut total_loss_amount = Decimal::ZERO;

    for pnl in &pnls {
        if *pnl > Decimal::ZERO {
            win_count += 1;
            total_win_amount += *pnl;
        } else if *pnl < Decimal::ZERO {
            loss_count += 1;
            total_loss_amount += pnl.abs();
        }
        // Break-even trades count in the total but in neither partition.
    }

    let win_rate = Decimal::from(win_count) / Decimal::from(total) * HUNDRED;

    let profit_factor = if total_loss_amount > Decimal::ZERO {
        Some(round_money(total_win_amount / total_loss_amount))
    } else if total_win_amount > Decimal::ZERO {
        None
    } else {
        Some(Decimal::ZERO)
    };

    let avg_win = if win_count > 0 {
        total_win_amount / Decimal::from(win_count)
    } else {
        Decimal::ZERO
    };
    let avg_loss = if loss_count > 0 {
        total_loss_amount / Decimal::from(loss_count)
    } else {
        Decimal::ZERO
    };

    // Expectancy = (WinRate * AvgWin) - (LossRate * AvgLoss), on the
    // unrounded intermediates.
    let win_fraction = win_rate / HUNDRED;
    let expectancy = win_fraction * avg_win - (Decimal::ONE - win_fraction) * avg_loss;

    let total_pnl: Decimal = pnls.iter().copied().sum();
    let best_trade = pnls.iter().copied().max().unwrap_or(Decimal::ZERO);
    let worst_trade = pnls.iter().copied().min().unwrap_or(Decimal::ZERO);

    TradeStats {
        total_trades: total,
        win_rate: win_rate.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        profit_factor,
        avg_win: round_money(avg_win),
        avg_loss: round_money(avg_loss),
        total_pnl: round_money(total_pnl),
        expectancy: round_money(expectancy),
        best_trade: round_money(best_trade),
        worst_trade: round_money(worst_trade),
    }
}
