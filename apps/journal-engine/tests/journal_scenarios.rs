//! End-to-end scenarios driving every aggregator off one trade history.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use journal_engine::analytics::{
    self, build_calendar, build_equity_curve, compute_stats, pips, r_multiple, track_streaks,
    CalendarMonth,
};
use journal_engine::journal::{Direction, Trade, TradeStatus};

fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

fn trade(
    id: &str,
    entry: Decimal,
    exit: Decimal,
    commission: Decimal,
    entry_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
) -> Trade {
    Trade {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        pair: "EUR/USD".to_string(),
        direction: Direction::Long,
        entry_price: entry,
        exit_price: Some(exit),
        stop_loss: entry - dec!(0.0050),
        take_profit: None,
        lot_size: dec!(1.0),
        commission,
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

/// Three EUR/USD longs: +$500, -$500, and +$98 ($100 gross less $2
/// commission), spread over three days.
fn scenario_trades() -> Vec<Trade> {
    vec![
        trade("t1", dec!(1.1000), dec!(1.1050), Decimal::ZERO, ts(2, 9), ts(2, 15)),
        trade("t2", dec!(1.1000), dec!(1.0950), Decimal::ZERO, ts(3, 9), ts(3, 15)),
        trade("t3", dec!(1.1000), dec!(1.1010), dec!(2), ts(4, 9), ts(4, 15)),
    ]
}

#[test]
fn test_scenario_summary_statistics() {
    let stats = compute_stats(&scenario_trades(), &[]);

    assert_eq!(stats.total_trades, 3);
    assert_eq!(stats.win_rate, dec!(66.7));
    assert_eq!(stats.total_pnl, dec!(98.00));
    assert_eq!(stats.best_trade, dec!(500.00));
    assert_eq!(stats.worst_trade, dec!(-500.00));
    assert_eq!(stats.avg_win, dec!(299.00));
    assert_eq!(stats.avg_loss, dec!(500.00));
    // 598 / 500 = 1.196, rounded half away from zero.
    assert_eq!(stats.profit_factor, Some(dec!(1.20)));
}

#[test]
fn test_scenario_aggregators_agree_on_total_pnl() {
    let trades = scenario_trades();
    let stats = compute_stats(&trades, &[]);

    let equity = build_equity_curve(&trades, dec!(10000), &[]);
    assert_eq!(equity.final_balance - equity.starting_balance, stats.total_pnl);

    let calendar = build_calendar(&trades, CalendarMonth { year: 2026, month: 3 });
    let calendar_total: Decimal = calendar.days.values().map(|d| d.pnl).sum();
    assert_eq!(calendar_total, stats.total_pnl);

    let streaks = track_streaks(&trades);
    let daily_total: Decimal = streaks.daily.iter().map(|d| d.pnl).sum();
    assert_eq!(daily_total, stats.total_pnl);
}

#[test]
fn test_scenario_equity_curve_shape() {
    let equity = build_equity_curve(&scenario_trades(), dec!(10000), &[]);
    // Start point plus one per trade.
    assert_eq!(equity.points.len(), 4);
    assert_eq!(equity.points[0].balance, dec!(10000.00));
    assert_eq!(equity.points[1].balance, dec!(10500.00));
    assert_eq!(equity.points[2].balance, dec!(10000.00));
    assert_eq!(equity.points[3].balance, dec!(10098.00));
    assert_eq!(equity.points[3].label, "Trade 3: +$98.00");
}

#[test]
fn test_scenario_streaks_and_calendar() {
    let trades = scenario_trades();

    let streaks = track_streaks(&trades);
    assert_eq!(streaks.profitable_days, 2);
    assert_eq!(streaks.losing_days, 1);
    assert_eq!(streaks.current_streak, 1);

    let calendar = build_calendar(&trades, CalendarMonth { year: 2026, month: 3 });
    assert_eq!(calendar.summary.trades, 3);
    assert_eq!(calendar.summary.trading_days, 3);
    // 2 of 3 trades won, whole percent.
    assert_eq!(calendar.summary.win_rate, dec!(67));
    assert_eq!(calendar.max_daily_pnl, dec!(500.00));
    assert_eq!(calendar.min_daily_pnl, dec!(-500.00));
}

#[test]
fn test_open_trades_never_reach_aggregates() {
    let mut trades = scenario_trades();
    let mut open = trade("t4", dec!(1.1000), dec!(1.2000), Decimal::ZERO, ts(5, 9), ts(5, 15));
    open.status = TradeStatus::Open;
    open.exit_price = None;
    open.exit_time = None;
    trades.push(open);

    let stats = compute_stats(&trades, &[]);
    assert_eq!(stats.total_trades, 3);
    assert_eq!(stats.total_pnl, dec!(98.00));

    // The open trade still shows up in pair activity.
    let dist = analytics::pair_distribution(&trades);
    assert_eq!(dist, vec![("EUR/USD".to_string(), 4)]);
}

#[test]
fn test_trade_log_round_trips_through_json() {
    let trades = scenario_trades();
    let json = serde_json::to_string(&trades).unwrap();
    let back: Vec<Trade> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(back[2].commission, dec!(2));
    assert_eq!(compute_stats(&back, &[]), compute_stats(&trades, &[]));
}

fn price() -> impl Strategy<Value = Decimal> {
    // Prices in (0.0001, 20.0000] at 4 decimal places.
    (1i64..=200_000).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #[test]
    fn prop_pips_antisymmetric_under_direction(entry in price(), exit in price()) {
        let long = pips("EUR/USD", entry, exit, Direction::Long);
        let short = pips("EUR/USD", entry, exit, Direction::Short);
        prop_assert_eq!(long, -short);
    }

    #[test]
    fn prop_pips_zero_for_flat_exit(entry in price()) {
        prop_assert_eq!(pips("EUR/USD", entry, entry, Direction::Long), Decimal::ZERO);
        prop_assert_eq!(pips("USD/JPY", entry, entry, Direction::Short), Decimal::ZERO);
    }

    #[test]
    fn prop_profit_loss_rounding_idempotent(
        entry in price(),
        exit in price(),
        lot in (1i64..=500).prop_map(|v| Decimal::new(v, 2)),
        commission in (0i64..=2000).prop_map(|v| Decimal::new(v, 2)),
    ) {
        // Net P/L is already at 2 dp; re-rounding must be a no-op.
        for pair in ["EUR/USD", "USD/JPY"] {
            let pnl = analytics::profit_loss(pair, entry, exit, lot, Direction::Long, commission);
            prop_assert_eq!(
                pnl,
                pnl.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            );
        }
    }

    #[test]
    fn prop_r_multiple_total(entry in price(), exit in price(), stop in price()) {
        // Never panics, even with a stop on the wrong side or at entry.
        let r = r_multiple(entry, exit, stop, Direction::Long);
        if stop == entry {
            prop_assert_eq!(r, Decimal::ZERO);
        }
    }

    #[test]
    fn prop_equity_final_matches_stats(moves in proptest::collection::vec(-300i64..=300, 0..20)) {
        let trades: Vec<Trade> = moves
            .iter()
            .enumerate()
            .map(|(i, pips_moved)| {
                let entry = dec!(1.1000);
                trade(
                    &format!("t{i}"),
                    entry,
                    entry + Decimal::new(*pips_moved, 4),
                    Decimal::ZERO,
                    ts(2, 9),
                    ts(2, 15),
                )
            })
            .collect();

        let stats = compute_stats(&trades, &[]);
        let equity = build_equity_curve(&trades, dec!(10000), &[]);
        prop_assert_eq!(equity.final_balance - equity.starting_balance, stats.total_pnl);
    }
}
