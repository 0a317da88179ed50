//! Normalization of raw user input into the settings domains.

use crate::core::settings::{
    DEFAULT_INTEREST_RATE, INTEREST_RATE_STEP, MAX_INTEREST_RATE, MIN_INTEREST_RATE,
};
use tracing::debug;

/// Strips every non-digit and parses what remains as a base-10 integer.
///
/// An empty remainder parses as zero. Digit runs too long for `u64` saturate
/// at `u64::MAX`.
pub fn parse_currency_text(raw: &str) -> u64 {
    digits_only(raw)
        .bytes()
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Clamps a parsed down payment to the vehicle price.
pub fn clamp_down_payment(parsed: u64, vehicle_price: u64) -> u64 {
    if parsed > vehicle_price {
        debug!(parsed, vehicle_price, "Down payment clamped to vehicle price");
    }
    parsed.min(vehicle_price)
}

/// Coerces an arbitrary rate into the slider domain: clamped to [0, 20] and
/// snapped to the nearest 0.25 step.
pub fn normalize_interest_rate(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_INTEREST_RATE;
    }
    let clamped = value.clamp(MIN_INTEREST_RATE, MAX_INTEREST_RATE);
    (clamped / INTEREST_RATE_STEP).round() * INTEREST_RATE_STEP
}

/// A currency text field: what the user is typing, kept apart from the
/// value last committed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyField {
    text: String,
    committed: u64,
}

impl CurrencyField {
    pub fn new(committed: u64) -> Self {
        Self {
            text: committed.to_string(),
            committed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn committed(&self) -> u64 {
        self.committed
    }

    /// Stages the digits of `raw` as display text and returns the parsed
    /// value so the owner can clamp and commit it.
    pub fn input(&mut self, raw: &str) -> u64 {
        self.text = digits_only(raw);
        parse_currency_text(&self.text)
    }

    /// Records the value that was actually committed. The display text is
    /// left alone until blur.
    pub fn commit(&mut self, value: u64) {
        self.committed = value;
    }

    /// Redraws the display text from the committed value.
    pub fn blur(&mut self) {
        self.text = self.committed.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_text() {
        assert_eq!(parse_currency_text("35000"), 35000);
        assert_eq!(parse_currency_text("$35,000"), 35000);
        assert_eq!(parse_currency_text("035000"), 35000);
        assert_eq!(parse_currency_text("-1200"), 1200);
        assert_eq!(parse_currency_text("12.50"), 1250);
        assert_eq!(parse_currency_text(""), 0);
        assert_eq!(parse_currency_text("abc"), 0);
        assert_eq!(parse_currency_text("٣٤"), 0);
    }

    #[test]
    fn test_parse_currency_text_saturates() {
        assert_eq!(parse_currency_text("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_canonical_string_is_a_fixed_point() {
        for raw in ["0", "7", "$1,234", "00042", "", "x9y9", "18446744073709551615", "1e30"] {
            let committed = parse_currency_text(raw);
            assert_eq!(parse_currency_text(&committed.to_string()), committed);
        }
    }

    #[test]
    fn test_down_payment_clamped_to_price() {
        assert_eq!(clamp_down_payment(5000, 35000), 5000);
        assert_eq!(clamp_down_payment(50000, 35000), 35000);
        assert_eq!(clamp_down_payment(1, 0), 0);
        assert_eq!(clamp_down_payment(parse_currency_text(""), 35000), 0);
    }

    #[test]
    fn test_normalize_interest_rate() {
        assert_eq!(normalize_interest_rate(6.5), 6.5);
        assert_eq!(normalize_interest_rate(6.3), 6.25);
        assert_eq!(normalize_interest_rate(6.4), 6.5);
        assert_eq!(normalize_interest_rate(-3.0), 0.0);
        assert_eq!(normalize_interest_rate(25.0), 20.0);
        assert_eq!(normalize_interest_rate(f64::NAN), DEFAULT_INTEREST_RATE);
        assert_eq!(normalize_interest_rate(f64::INFINITY), DEFAULT_INTEREST_RATE);
    }

    #[test]
    fn test_field_keeps_typed_text_until_blur() {
        let mut field = CurrencyField::new(35000);
        assert_eq!(field.text(), "35000");

        let value = field.input("0$35,000");
        field.commit(value);
        assert_eq!(field.text(), "035000");
        assert_eq!(field.committed(), 35000);

        field.blur();
        assert_eq!(field.text(), "35000");
    }

    #[test]
    fn test_field_blur_after_empty_input() {
        let mut field = CurrencyField::new(7000);
        let value = field.input("");
        field.commit(value);
        assert_eq!(field.text(), "");
        assert_eq!(field.committed(), 0);

        field.blur();
        assert_eq!(field.text(), "0");
    }
}
