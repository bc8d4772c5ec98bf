//! Journal Engine Binary
//!
//! Computes a full analytics report from a JSON trade log and prints it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-engine -- trades.json [config.yaml]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use chrono::Utc;

use journal_engine::analytics::{
    self, format, CalendarMonth, CalendarReport, EquityCurve, StreakReport, TradeStats,
};
use journal_engine::config::{load_config, Config};
use journal_engine::journal::{load_trade_log, CurrencyPair, Trade};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let trades_path = args
        .next()
        .context("usage: journal-engine <trades.json> [config.yaml]")?;
    let config_path = args.next();

    let config = match config_path.as_deref() {
        Some(path) => load_config(Some(path))?,
        None => Config::default(),
    };

    tracing::info!(path = %trades_path, "loading trade log");
    let trades = load_trade_log(&trades_path)?;
    warn_on_invalid_pairs(&trades);
    tracing::info!(trades = trades.len(), "trade log loaded");

    let stats = analytics::compute_stats(&trades, &config.analytics.excluded_emotions);
    let equity = analytics::build_equity_curve(
        &trades,
        config.account.starting_balance,
        &config.analytics.excluded_emotions,
    );
    let streaks = analytics::track_streaks(&trades);
    let month = CalendarMonth::containing(Utc::now().date_naive());
    let calendar = analytics::build_calendar(&trades, month);

    print_stats(&stats);
    print_equity(&equity);
    print_streaks(&streaks);
    print_calendar(&calendar);
    print_breakdowns(&trades, &config);

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "journal_engine=info"
                    .parse()
                    .expect("static directive 'journal_engine=info' is valid"),
            ),
        )
        .init();
}

/// Malformed pair identifiers don't stop the report; the metrics fall back
/// to non-JPY handling for them, so just surface a warning.
fn warn_on_invalid_pairs(trades: &[Trade]) {
    for trade in trades {
        if let Err(e) = CurrencyPair::new(&trade.pair) {
            tracing::warn!(trade_id = %trade.id, error = %e, "unrecognized pair format");
        }
    }
}

fn print_stats(stats: &TradeStats) {
    println!("== Performance ==");
    println!("Trades:         {}", stats.total_trades);
    println!("Win rate:       {}", format::pct(stats.win_rate));
    println!("Total P/L:      {}", format::signed_money(stats.total_pnl));
    println!("Avg win:        {}", format::money(stats.avg_win));
    println!("Avg loss:       {}", format::money(stats.avg_loss));
    println!("Profit factor:  {}", format::ratio(stats.profit_factor));
    println!("Expectancy:     {}", format::signed_money(stats.expectancy));
    println!("Best trade:     {}", format::signed_money(stats.best_trade));
    println!("Worst trade:    {}", format::signed_money(stats.worst_trade));
    println!("Payoff ratio:   {}", format::ratio(stats.payoff_ratio()));
    if let (Some(required), Some(edge)) = (stats.break_even_win_rate(), stats.edge()) {
        println!("Break-even WR:  {}", format::pct(required));
        println!("Edge:           {}", format::pct(edge));
    }
}

fn print_equity(equity: &EquityCurve) {
    println!("\n== Equity Curve ==");
    for point in &equity.points {
        println!("{:>4}  {}  {}", point.seq, format::money(point.balance), point.label);
    }
    println!("Final balance:  {}", format::money(equity.final_balance));
    if let (Some(clean), Some(cost)) = (equity.clean_final_balance, equity.flagged_cost) {
        println!("Clean balance:  {}", format::money(clean));
        println!("Flagged cost:   {}", format::signed_money(cost));
    }
}

fn print_streaks(streaks: &StreakReport) {
    println!("\n== Streaks ==");
    println!(
        "Current streak: {} ({:?})",
        streaks.current_streak, streaks.current_kind
    );
    println!("Longest win:    {}", streaks.longest_win_streak);
    println!("Longest loss:   {}", streaks.longest_loss_streak);
    println!(
        "Days P/L:       {} profitable / {} losing",
        streaks.profitable_days, streaks.losing_days
    );
}

fn print_calendar(calendar: &CalendarReport) {
    println!(
        "\n== Calendar {}-{:02} ==",
        calendar.month.year, calendar.month.month
    );
    for day in calendar.days.values() {
        if calendar.month.contains(day.date) {
            println!(
                "{}  {}  ({} trades, {}W/{}L)",
                day.date,
                format::signed_money(day.pnl),
                day.trades,
                day.wins,
                day.losses
            );
        }
    }
    println!(
        "Month: {} over {} trades, {} win rate, {} trading days",
        format::signed_money(calendar.summary.pnl),
        calendar.summary.trades,
        format::pct(calendar.summary.win_rate),
        calendar.summary.trading_days
    );
}

fn print_breakdowns(trades: &[Trade], config: &Config) {
    let sections = [
        ("By Session", analytics::session_breakdown(trades)),
        ("By Setup", analytics::setup_breakdown(trades)),
        ("By Emotion", analytics::emotion_breakdown(trades)),
        ("By Pair", analytics::pair_breakdown(trades)),
    ];
    for (title, groups) in sections {
        println!("\n== {title} ==");
        for g in groups {
            println!(
                "{:<20} {:>10}  {}W/{}L  {} win rate  avg {}",
                g.key,
                format::signed_money(g.pnl),
                g.wins,
                g.losses,
                format::pct(g.win_rate),
                format::signed_money(g.avg_pnl)
            );
        }
    }

    println!("\n== Pair Activity ==");
    for (pair, count) in analytics::pair_distribution(trades) {
        println!("{pair:<10} {count}");
    }

    let mistakes = analytics::mistake_report(trades, &config.analytics.negative_emotions);
    println!("\n== Mistake Cost ==");
    println!("Tagged P/L:     {}", format::signed_money(mistakes.tagged_pnl));
    println!("Clean P/L:      {}", format::signed_money(mistakes.clean_pnl));
    println!("Cost of tags:   {}", format::signed_money(mistakes.delta));
}
