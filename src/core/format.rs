//! Display formatting for amounts, rates and dates.
//!
//! Amounts are rounded here and nowhere else: the engine keeps full
//! precision, only what is shown to people is cut to two decimals.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Swedish short date, e.g. `2025-06-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Round to two decimals, commercial rounding (half away from zero).
pub fn round_money(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// `"<amount> <symbol>"` with exactly two decimals, e.g. `"255.00 kr"`.
pub fn format_money(value: Decimal, symbol: &str) -> String {
    let amount = format!("{:.2}", round_money(value));
    if symbol.is_empty() {
        amount
    } else {
        format!("{amount} {symbol}")
    }
}

/// VAT rate without trailing zeros: `25`, `12.5`.
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_has_two_decimals_and_suffix() {
        assert_eq!(format_money(dec!(255), "kr"), "255.00 kr");
        assert_eq!(format_money(dec!(2.5), "€"), "2.50 €");
        assert_eq!(format_money(dec!(0), "$"), "0.00 $");
    }

    #[test]
    fn money_rounds_half_up() {
        assert_eq!(format_money(dec!(1.005), "kr"), "1.01 kr");
        assert_eq!(format_money(dec!(1.004), "kr"), "1.00 kr");
        assert_eq!(format_money(dec!(-1.005), "kr"), "-1.01 kr");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!(format_money(dec!(-0.001), "kr"), "0.00 kr");
    }

    #[test]
    fn empty_symbol() {
        assert_eq!(format_money(dec!(12), ""), "12.00");
    }

    #[test]
    fn rate_strips_zeros() {
        assert_eq!(format_rate(dec!(25.00)), "25");
        assert_eq!(format_rate(dec!(12.50)), "12.5");
        assert_eq!(format_rate(dec!(0)), "0");
    }

    #[test]
    fn swedish_dates() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(format_date(d), "2025-06-01");
    }
}
