//! Display helpers for report output.

use rust_decimal::Decimal;

/// Format a money amount as `$1,234.56`-less plain dollars, e.g. `$98.00`.
#[must_use]
pub fn money(value: Decimal) -> String {
    if value < Decimal::ZERO {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}

/// Format a money amount with an explicit sign, e.g. `+$98.00` / `-$500.00`.
#[must_use]
pub fn signed_money(value: Decimal) -> String {
    if value < Decimal::ZERO {
        format!("-${:.2}", -value)
    } else {
        format!("+${value:.2}")
    }
}

/// Format a percentage value, e.g. `66.7%`.
#[must_use]
pub fn pct(value: Decimal) -> String {
    format!("{value}%")
}

/// Format a ratio that may be infinite, e.g. a profit factor with no
/// losing trades renders as `inf`.
#[must_use]
pub fn ratio(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "inf".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_negative() {
        assert_eq!(money(dec!(-500)), "-$500.00");
        assert_eq!(money(dec!(98)), "$98.00");
    }

    #[test]
    fn test_signed_money() {
        assert_eq!(signed_money(dec!(98)), "+$98.00");
        assert_eq!(signed_money(dec!(-500.5)), "-$500.50");
        assert_eq!(signed_money(Decimal::ZERO), "+$0.00");
    }

    #[test]
    fn test_ratio_infinite() {
        assert_eq!(ratio(None), "inf");
        assert_eq!(ratio(Some(dec!(1.2))), "1.20");
    }
}
