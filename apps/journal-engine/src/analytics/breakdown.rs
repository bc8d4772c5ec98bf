//! Grouped performance breakdowns.
//!
//! Each breakdown partitions resolved trades by one attribute (session,
//! setup, emotion, pair) and reports per-group win/loss counts, summed
//! P/L, and a whole-percent win rate. A trade carrying several setups or
//! emotions contributes its full P/L to every tag it carries, so across
//! a multi-tag breakdown the group P/Ls can sum past the account P/L.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constants::HUNDRED;
use super::resolved_with_pnl;
use crate::journal::Trade;

/// Per-group aggregate within a breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBreakdown {
    /// Group label (session name, setup tag, emotion tag, or pair).
    pub key: String,
    /// Trades with strictly positive P/L.
    pub wins: u64,
    /// Trades with strictly negative P/L.
    pub losses: u64,
    /// Summed net P/L of the group's trades.
    pub pnl: Decimal,
    /// Whole-percent `wins / (wins + losses)`; break-even trades are
    /// counted in `trades` but sit outside the rate.
    pub win_rate: Decimal,
    /// Total resolved trades in the group, break-even included.
    pub trades: u64,
    /// `pnl / trades`, rounded to cents.
    pub avg_pnl: Decimal,
}

#[derive(Default)]
struct GroupAccum {
    wins: u64,
    losses: u64,
    pnl: Decimal,
    trades: u64,
}

impl GroupAccum {
    fn record(&mut self, pnl: Decimal) {
        if pnl > Decimal::ZERO {
            self.wins += 1;
        } else if pnl < Decimal::ZERO {
            self.losses += 1;
        }
        self.pnl += pnl;
        self.trades += 1;
    }

    fn finish(self, key: String) -> GroupBreakdown {
        let decided = self.wins + self.losses;
        let win_rate = if decided == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(self.wins) / Decimal::from(decided) * HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        };
        let avg_pnl = if self.trades == 0 {
            Decimal::ZERO
        } else {
            (self.pnl / Decimal::from(self.trades))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };
        GroupBreakdown {
            key,
            wins: self.wins,
            losses: self.losses,
            pnl: self.pnl,
            win_rate,
            trades: self.trades,
            avg_pnl,
        }
    }
}

/// Build a breakdown where `keys` names every group a trade belongs to.
fn breakdown_by<F>(trades: &[Trade], keys: F) -> Vec<GroupBreakdown>
where
    F: Fn(&Trade) -> Vec<String>,
{
    let mut groups: BTreeMap<String, GroupAccum> = BTreeMap::new();
    for (trade, pnl) in resolved_with_pnl(trades) {
        for key in keys(trade) {
            groups.entry(key).or_default().record(pnl);
        }
    }

    let mut out: Vec<GroupBreakdown> = groups
        .into_iter()
        .map(|(key, accum)| accum.finish(key))
        .collect();
    // Most profitable first; ties keep alphabetical key order.
    out.sort_by(|a, b| b.pnl.cmp(&a.pnl).then_with(|| a.key.cmp(&b.key)));
    out
}

/// Performance grouped by the trading session of entry.
#[must_use]
pub fn session_breakdown(trades: &[Trade]) -> Vec<GroupBreakdown> {
    breakdown_by(trades, |t| vec![t.session().label().to_string()])
}

/// Performance grouped by setup tag. Untagged trades are skipped.
#[must_use]
pub fn setup_breakdown(trades: &[Trade]) -> Vec<GroupBreakdown> {
    breakdown_by(trades, |t| t.setups.clone())
}

/// Performance grouped by emotion tag. Untagged trades are skipped.
#[must_use]
pub fn emotion_breakdown(trades: &[Trade]) -> Vec<GroupBreakdown> {
    breakdown_by(trades, |t| t.emotions.clone())
}

/// Performance grouped by currency pair.
#[must_use]
pub fn pair_breakdown(trades: &[Trade]) -> Vec<GroupBreakdown> {
    breakdown_by(trades, |t| vec![t.pair.as_str().to_string()])
}

/// Trade counts per pair over the **whole** journal, open trades
/// included, sorted by count descending then pair ascending.
#[must_use]
pub fn pair_distribution(trades: &[Trade]) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for trade in trades {
        *counts.entry(trade.pair.as_str().to_string()).or_insert(0) += 1;
    }
    let mut out: Vec<(String, u64)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// The cost of trading while tagged with a negative emotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistakeReport {
    /// Summed P/L of trades carrying at least one flagged emotion.
    pub tagged_pnl: Decimal,
    /// Summed P/L of the remaining trades.
    pub clean_pnl: Decimal,
    /// What the flagged trades cost: the account P/L improvement had they
    /// never been taken, i.e. `-tagged_pnl`. Positive when they dragged
    /// the account down.
    pub delta: Decimal,
}

/// Split account P/L into emotionally-flagged and clean halves.
///
/// `negative_emotions` decides what counts as a mistake; callers usually
/// pass [`crate::journal::catalog::NEGATIVE_EMOTIONS`] or the configured
/// override.
#[must_use]
pub fn mistake_report(trades: &[Trade], negative_emotions: &[String]) -> MistakeReport {
    let mut tagged_pnl = Decimal::ZERO;
    let mut clean_pnl = Decimal::ZERO;

    for (trade, pnl) in resolved_with_pnl(trades) {
        if trade.tagged_with_any(negative_emotions) {
            tagged_pnl += pnl;
        } else {
            clean_pnl += pnl;
        }
    }

    MistakeReport {
        tagged_pnl,
        clean_pnl,
        delta: -tagged_pnl,
    }
}
