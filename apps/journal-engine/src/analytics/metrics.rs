//! Per-trade arithmetic: pips, profit/loss, R-multiple, session.
//!
//! Pure functions over scalar inputs. Every function here is total: bad
//! input (unknown pair format, stop at entry) yields a defined value, never
//! a panic or a NaN.

use chrono::{DateTime, Timelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{PIP_MULTIPLIER, PIP_MULTIPLIER_JPY, PIP_VALUE, PIP_VALUE_JPY};
use crate::journal::Direction;

/// Coarse UTC-hour session bucket for time-of-day analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradingSession {
    /// Tokyo/Sydney hours, 00:00-09:00 UTC.
    Asian,
    /// London hours, 08:00-17:00 UTC.
    London,
    /// New York hours, 13:00-22:00 UTC.
    #[serde(rename = "New York")]
    NewYork,
    /// Outside every named session.
    #[serde(rename = "Off-Hours")]
    OffHours,
}

impl TradingSession {
    /// Display label, matching the journal UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asian => "Asian",
            Self::London => "London",
            Self::NewYork => "New York",
            Self::OffHours => "Off-Hours",
        }
    }
}

impl fmt::Display for TradingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session windows as (session, start hour, end hour), end exclusive.
///
/// The windows overlap (08-09 UTC is inside both Asian and London, 13-17
/// inside both London and New York). Classification walks this list in
/// order and the first match wins, so the order is part of the contract:
/// an hour-8 entry is Asian, an hour-13 entry is London.
pub const SESSION_WINDOWS: &[(TradingSession, u32, u32)] = &[
    (TradingSession::Asian, 0, 9),
    (TradingSession::London, 8, 17),
    (TradingSession::NewYork, 13, 22),
];

/// Whether the pip convention for a pair is the JPY one.
///
/// Raw substring match, by design: the entry form normalizes pairs to
/// uppercase `BASE/QUOTE`, and anything else falls back to the non-JPY
/// multiplier rather than failing.
#[must_use]
pub fn is_jpy_pair(pair: &str) -> bool {
    pair.contains("JPY")
}

/// Price move in pips, signed so a favorable move is positive for either
/// direction. Rounded to 1 decimal place.
#[must_use]
pub fn pips(pair: &str, entry_price: Decimal, exit_price: Decimal, direction: Direction) -> Decimal {
    let multiplier = if is_jpy_pair(pair) {
        PIP_MULTIPLIER_JPY
    } else {
        PIP_MULTIPLIER
    };

    let diff = match direction {
        Direction::Long => exit_price - entry_price,
        Direction::Short => entry_price - exit_price,
    };

    (diff * multiplier).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Net P/L in account currency: pips x pip value x lot size, minus
/// commission. Rounded to 2 decimal places.
///
/// Commission always reduces the net result, regardless of direction.
#[must_use]
pub fn profit_loss(
    pair: &str,
    entry_price: Decimal,
    exit_price: Decimal,
    lot_size: Decimal,
    direction: Direction,
    commission: Decimal,
) -> Decimal {
    let pip_value = if is_jpy_pair(pair) {
        PIP_VALUE_JPY
    } else {
        PIP_VALUE
    };

    let gross = pips(pair, entry_price, exit_price, direction) * pip_value * lot_size;
    round_money(gross - commission)
}

/// Realized reward as a multiple of the risk planned at entry
/// (entry-to-stop distance). Rounded to 2 decimal places.
///
/// A stop placed exactly at entry means zero planned risk; the multiple is
/// reported as 0 rather than dividing by zero. The planned take-profit is
/// deliberately not consulted: an R-multiple reflects the realized outcome.
#[must_use]
pub fn r_multiple(
    entry_price: Decimal,
    exit_price: Decimal,
    stop_loss: Decimal,
    direction: Direction,
) -> Decimal {
    let risk_per_unit = match direction {
        Direction::Long => entry_price - stop_loss,
        Direction::Short => stop_loss - entry_price,
    };

    if risk_per_unit == Decimal::ZERO {
        return Decimal::ZERO;
    }

    let reward_per_unit = match direction {
        Direction::Long => exit_price - entry_price,
        Direction::Short => entry_price - exit_price,
    };

    (reward_per_unit / risk_per_unit)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Classify a timestamp into a trading session by UTC hour of day.
///
/// Walks [`SESSION_WINDOWS`] in order; first match wins.
#[must_use]
pub fn trading_session(timestamp: DateTime<Utc>) -> TradingSession {
    let hour = timestamp.hour();

    for &(session, start, end) in SESSION_WINDOWS {
        if (start..end).contains(&hour) {
            return session;
        }
    }

    TradingSession::OffHours
}

/// Round a money amount to 2 decimal places, half away from zero.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
