//! Equity curve construction.
//!
//! Points are one-per-trade in exit-time order, not one-per-calendar-day:
//! a week with no trades produces no flat segment. The optional comparison
//! series answers "where would the balance be without the flagged trades"
//! by replaying the same sequence and skipping them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::signed_money;
use super::metrics::round_money;
use super::resolved_with_pnl;
use crate::journal::Trade;

/// One point on the equity curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityPoint {
    /// 1-based trade sequence number; 0 for the synthetic start point.
    pub seq: u64,
    /// Display label, e.g. `Trade 3: +$98.00` (with a `*` suffix on
    /// trades that the comparison series skipped).
    pub label: String,
    /// Exit date of the trade; absent on the start point.
    pub date: Option<NaiveDate>,
    /// Running balance after this trade.
    pub balance: Decimal,
    /// Running comparison balance; only present in comparison mode.
    pub clean_balance: Option<Decimal>,
    /// This trade's net P/L (zero on the start point).
    pub pnl: Decimal,
    /// Whether the trade carried an excluded emotion tag.
    pub flagged: bool,
}

/// A built equity curve with its summary values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityCurve {
    /// Start point plus one point per resolved trade.
    pub points: Vec<EquityPoint>,
    /// Balance before any trade.
    pub starting_balance: Decimal,
    /// Balance after the last trade.
    pub final_balance: Decimal,
    /// Final comparison balance; only present in comparison mode.
    pub clean_final_balance: Option<Decimal>,
    /// `clean - actual`: the cost attributable to flagged trades.
    /// Positive means the flagged trades lost money overall.
    pub flagged_cost: Option<Decimal>,
}

/// Build the running-balance series for a trade list.
///
/// Resolved trades are sorted ascending by exit time (a resolved trade
/// missing its exit timestamp sorts by entry time instead). When
/// `excluded_emotions` is non-empty a parallel "clean" series is carried
/// that skips trades tagged with any of them.
#[must_use]
pub fn build_equity_curve(
    trades: &[Trade],
    starting_balance: Decimal,
    excluded_emotions: &[String],
) -> EquityCurve {
    let compare = !excluded_emotions.is_empty();

    let mut resolved: Vec<(&Trade, Decimal)> = resolved_with_pnl(trades).collect();
    resolved.sort_by_key(|(trade, _)| trade.exit_time.unwrap_or(trade.entry_time));

    let mut balance = starting_balance;
    let mut clean_balance = starting_balance;

    let mut points = Vec::with_capacity(resolved.len() + 1);
    points.push(EquityPoint {
        seq: 0,
        label: "Start".to_string(),
        date: None,
        balance: round_money(starting_balance),
        clean_balance: compare.then(|| round_money(starting_balance)),
        pnl: Decimal::ZERO,
        flagged: false,
    });

    for (index, (trade, pnl)) in resolved.iter().enumerate() {
        let flagged = trade.tagged_with_any(excluded_emotions);
        balance += *pnl;
        if !flagged {
            clean_balance += *pnl;
        }

        let seq = index as u64 + 1;
        let mut label = format!("Trade {seq}: {}", signed_money(*pnl));
        if flagged {
            label.push_str(" *");
        }

        points.push(EquityPoint {
            seq,
            label,
            date: trade.exit_time.map(|t| t.date_naive()),
            balance: round_money(balance),
            clean_balance: compare.then(|| round_money(clean_balance)),
            pnl: *pnl,
            flagged,
        });
    }

    let final_balance = round_money(balance);
    let clean_final_balance = compare.then(|| round_money(clean_balance));

    EquityCurve {
        points,
        starting_balance: round_money(starting_balance),
        final_balance,
        clean_final_balance,
        flagged_cost: clean_final_balance.map(|clean| clean - final_balance),
    }
}
