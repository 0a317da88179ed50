//! Fixed-rate amortization of the financed amount.
use crate::core::settings::{LoanTerm, Settings};

/// Figures derived from a set of settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub financed_amount: f64,
    pub monthly_payment: f64,
    pub total_of_payments: f64,
    pub total_interest: f64,
}

/// Amount left to finance once the down payment is applied, never negative.
pub fn financed_amount(vehicle_price: u64, down_payment: u64) -> f64 {
    vehicle_price.saturating_sub(down_payment) as f64
}

/// Level monthly payment that fully amortizes `principal` over `term` at
/// `annual_rate` percent, compounded monthly.
///
/// A zero rate divides the principal evenly across the term; a non-positive
/// principal always yields zero.
pub fn monthly_payment(principal: f64, annual_rate: f64, term: LoanTerm) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    let n = term.months() as f64;
    if annual_rate <= 0.0 {
        return principal / n;
    }

    let r = annual_rate / 100.0 / 12.0;
    let growth = (1.0 + r).powf(n);
    principal * (r * growth) / (growth - 1.0)
}

/// Computes every derived figure for `settings`.
pub fn compute_derived(settings: &Settings) -> Estimate {
    let financed_amount = financed_amount(settings.vehicle_price, settings.down_payment);
    let monthly_payment =
        monthly_payment(financed_amount, settings.interest_rate, settings.loan_term);
    let total_of_payments = monthly_payment * settings.loan_term.months() as f64;

    Estimate {
        financed_amount,
        monthly_payment,
        total_of_payments,
        // Float noise can push this fractionally below zero
        total_interest: (total_of_payments - financed_amount).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(price: u64, down: u64, rate: f64, term: LoanTerm) -> Settings {
        Settings {
            vehicle_price: price,
            down_payment: down,
            interest_rate: rate,
            loan_term: term,
        }
    }

    #[test]
    fn test_nothing_financed() {
        for term in LoanTerm::ALL {
            let est = compute_derived(&settings(20000, 20000, 6.5, term));
            assert_eq!(est.financed_amount, 0.0);
            assert_eq!(est.monthly_payment, 0.0);
            assert_eq!(est.total_of_payments, 0.0);
            assert_eq!(est.total_interest, 0.0);
        }
        // Stored down payment above price still finances nothing
        let est = compute_derived(&settings(1000, 5000, 9.0, LoanTerm::Sixty));
        assert_eq!(est.monthly_payment, 0.0);
        assert_eq!(monthly_payment(-10.0, 5.0, LoanTerm::Sixty), 0.0);
    }

    #[test]
    fn test_zero_rate_is_straight_division() {
        for term in LoanTerm::ALL {
            let est = compute_derived(&settings(35000, 7000, 0.0, term));
            assert_eq!(est.monthly_payment, 28000.0 / term.months() as f64);
            assert_eq!(est.total_interest, 0.0);
        }
    }

    #[test]
    fn test_default_settings_payment() {
        let est = compute_derived(&Settings::default());
        assert_eq!(est.financed_amount, 28000.0);
        assert!((est.monthly_payment - 547.852_150).abs() < 1e-5);
        assert!((est.total_of_payments - 32_871.129_007).abs() < 1e-5);
        assert!((est.total_interest - 4_871.129_007).abs() < 1e-5);
    }

    #[test]
    fn test_payment_across_terms() {
        let cases = [
            (LoanTerm::FortyEight, 664.018_682),
            (LoanTerm::SeventyTwo, 470.678_029),
            (LoanTerm::EightyFour, 415.784_221),
        ];
        for (term, expected) in cases {
            let payment = monthly_payment(28000.0, 6.5, term);
            assert!(
                (payment - expected).abs() < 1e-5,
                "{term} months: {payment} != {expected}"
            );
        }
    }

    #[test]
    fn test_payment_amortizes_principal() {
        // Rolling the balance forward month by month must land on zero.
        let principal = 28000.0;
        let r = 6.5 / 100.0 / 12.0;
        let payment = monthly_payment(principal, 6.5, LoanTerm::Sixty);
        let balance = (0..60).fold(principal, |bal, _| bal * (1.0 + r) - payment);
        assert!(balance.abs() < 1e-6);
    }

    #[test]
    fn test_total_interest_never_negative() {
        let prices = [0, 1, 999, 35000, 1_000_000];
        let rates = [0.0, 0.25, 6.5, 19.75, 20.0];
        for price in prices {
            for down in [0, price / 2, price] {
                for rate in rates {
                    for term in LoanTerm::ALL {
                        let est = compute_derived(&settings(price, down, rate, term));
                        assert!(est.total_interest >= 0.0);
                        assert!(est.monthly_payment >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_small_rate_is_close_to_zero_rate() {
        let with_rate = monthly_payment(1000.0, 0.25, LoanTerm::FortyEight);
        let without = monthly_payment(1000.0, 0.0, LoanTerm::FortyEight);
        assert!(with_rate > without);
        assert!((with_rate - 20.939_844).abs() < 1e-5);
    }
}
