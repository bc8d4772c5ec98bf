//! Decimal constants for trade metric calculations.

use rust_decimal::Decimal;

/// Pip multiplier for non-JPY pairs (pip at the 4th decimal).
pub const PIP_MULTIPLIER: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Pip multiplier for JPY pairs (pip at the 2nd decimal).
pub const PIP_MULTIPLIER_JPY: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Pip value per standard lot for non-JPY pairs, account currency.
///
/// A fixed simplifying constant, not derived from contract size.
pub const PIP_VALUE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Pip value per standard lot for JPY pairs, account currency.
pub const PIP_VALUE_JPY: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Default account starting balance for equity curves.
pub const DEFAULT_STARTING_BALANCE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// One hundred, for percentage conversions.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
