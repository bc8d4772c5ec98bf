//! Shared trade fixtures for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::journal::{Direction, Trade, TradeStatus};

/// A resolved EUR/USD trade with 1.0 lot, no commission, stop 50 pips
/// below entry, entered 2026-03-02 10:00 UTC and exited four hours later.
pub fn closed_trade(id: &str, entry: Decimal, exit: Decimal, direction: Direction) -> Trade {
    let entry_time = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap();
    let exit_time = Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap();
    closed_trade_at(id, entry, exit, direction, entry_time, exit_time)
}

/// A resolved EUR/USD trade with explicit entry/exit timestamps.
pub fn closed_trade_at(
    id: &str,
    entry: Decimal,
    exit: Decimal,
    direction: Direction,
    entry_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
) -> Trade {
    Trade {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        pair: "EUR/USD".to_string(),
        direction,
        entry_price: entry,
        exit_price: Some(exit),
        stop_loss: entry - dec!(0.0050),
        take_profit: None,
        lot_size: dec!(1.0),
        commission: Decimal::ZERO,
        entry_time,
        exit_time: Some(exit_time),
        status: TradeStatus::Closed,
        setups: vec![],
        emotions: vec![],
        notes: None,
        before_screenshot: None,
        after_screenshot: None,
        created_at: None,
        updated_at: None,
    }
}

/// A resolved trade whose P/L is the given pip move on an EUR/USD long,
/// entered and exited on the given UTC day.
pub fn day_trade(id: &str, day: (i32, u32, u32), pips: i64) -> Trade {
    let entry_time = Utc
        .with_ymd_and_hms(day.0, day.1, day.2, 9, 0, 0)
        .unwrap();
    let exit_time = Utc
        .with_ymd_and_hms(day.0, day.1, day.2, 15, 0, 0)
        .unwrap();
    let entry = dec!(1.1000);
    let exit = entry + Decimal::new(pips, 4);
    closed_trade_at(id, entry, exit, Direction::Long, entry_time, exit_time)
}
