//! en-US / USD rendering of amounts, rates and terms.
//!
//! Amounts are rounded to the requested number of fractional digits here and
//! nowhere else, half away from zero, via `rust_decimal`.

use crate::core::settings::LoanTerm;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "$";
const GROUP_SEPARATOR: char = ',';

/// Rounds `value` to `dp` fractional digits. Non-finite or unrepresentable
/// values become zero.
pub fn round_amount(value: f64, dp: u32) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole currency units with grouping, e.g. `$35,000`.
pub fn currency(value: f64) -> String {
    render(round_amount(value, 0), 0)
}

/// Currency with exactly two fractional digits, e.g. `$548.62`.
pub fn currency_with_cents(value: f64) -> String {
    render(round_amount(value, 2), 2)
}

/// Annual rate with two fractional digits, e.g. `6.50%`.
pub fn percent(rate: f64) -> String {
    format!("{:.2}%", round_amount(rate, 2))
}

/// e.g. `60 months (5 years)`.
pub fn loan_term(term: LoanTerm) -> String {
    format!("{} months ({} years)", term.months(), term.years())
}

fn render(amount: Decimal, dp: usize) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let digits = format!("{:.dp$}", amount.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
