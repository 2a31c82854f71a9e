//! Closed-form fixed-rate loan math
//!
//! Rates are annual percentages (6.5 = 6.5%), compounded monthly.
//! Terms are whole years; a loan of `term_years` has `term_years * 12` payments.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// One row of an amortization table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLine {
    /// Payment number (1-indexed)
    pub index: u32,
    pub payment_amount: f64,
    pub principal_amount: f64,
    pub interest_amount: f64,
    /// Balance after this payment
    pub remaining_balance: f64,
}

/// Monthly payment together with the full table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub monthly_payment: f64,
    pub schedule: Vec<PaymentLine>,
}

/// Lifetime totals of a purchase loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub amortization_schedule: Vec<PaymentLine>,
}

fn validate(principal: f64, term_years: u32) -> EngineResult<()> {
    if term_years == 0 {
        return Err(EngineError::invalid("term_years", "loan term must be positive"));
    }
    if principal.is_nan() || principal < 0.0 {
        return Err(EngineError::invalid(
            "principal",
            format!("principal must be non-negative, got {}", principal),
        ));
    }
    Ok(())
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Number of monthly payments, rejecting terms whose count does not fit an `i32` exponent
pub(crate) fn payment_count(term_years: u32) -> EngineResult<u32> {
    term_years
        .checked_mul(12)
        .filter(|&n| i32::try_from(n).is_ok())
        .ok_or_else(|| {
            EngineError::invalid(
                "term_years",
                format!("{} years is too many monthly payments", term_years),
            )
        })
}

/// Level monthly payment that retires `principal` over `term_years`
///
/// Uses the annuity formula `P*r*(1+r)^n / ((1+r)^n - 1)`. A zero rate
/// falls back to straight-line repayment `P/n`.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> EngineResult<f64> {
    validate(principal, term_years)?;
    let n = payment_count(term_years)?;

    if annual_rate_percent == 0.0 {
        return Ok(principal / n as f64);
    }

    let r = monthly_rate(annual_rate_percent);
    let growth = (1.0 + r).powi(n as i32);
    if growth.is_infinite() {
        // Interest-only in the limit
        return Ok(principal * r);
    }
    Ok(principal * r * growth / (growth - 1.0))
}

/// Outstanding balance after `payments_made` scheduled payments
///
/// Closed form: the present value of the payments still owed.
pub fn remaining_balance(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
    payments_made: u32,
) -> EngineResult<f64> {
    let payment = monthly_payment(principal, annual_rate_percent, term_years)?;
    let n = payment_count(term_years)?;
    if payments_made > n {
        return Err(EngineError::invalid(
            "payments_made",
            format!("{} exceeds the {} scheduled payments", payments_made, n),
        ));
    }

    let remaining = n - payments_made;
    if annual_rate_percent == 0.0 {
        return Ok(payment * remaining as f64);
    }

    let r = monthly_rate(annual_rate_percent);
    let growth = (1.0 + r).powi(remaining as i32);
    if growth.is_infinite() {
        return Ok(payment / r);
    }
    Ok(payment * ((growth - 1.0) / r) / growth)
}

/// Full amortization table, one line per payment
pub fn schedule(principal: f64, annual_rate_percent: f64, term_years: u32) -> EngineResult<Vec<PaymentLine>> {
    Ok(amortize(principal, annual_rate_percent, term_years)?.schedule)
}

/// Monthly payment and amortization table in one pass
pub fn amortize(principal: f64, annual_rate_percent: f64, term_years: u32) -> EngineResult<AmortizationResult> {
    let payment = monthly_payment(principal, annual_rate_percent, term_years)?;
    let r = monthly_rate(annual_rate_percent);
    let n = payment_count(term_years)?;

    let mut lines = Vec::with_capacity(n as usize);
    let mut balance = principal;

    for index in 1..=n {
        let interest = balance * r;
        let principal_part = payment - interest;
        balance = (balance - principal_part).max(0.0);

        lines.push(PaymentLine {
            index,
            payment_amount: payment,
            principal_amount: principal_part,
            interest_amount: interest,
            remaining_balance: balance,
        });
    }

    Ok(AmortizationResult {
        monthly_payment: payment,
        schedule: lines,
    })
}

/// Payment, lifetime totals and table for a purchase with a cash down payment
pub fn summarize_loan(
    property_price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> EngineResult<LoanSummary> {
    let loan_amount = property_price - down_payment;
    let result = amortize(loan_amount, annual_rate_percent, term_years)?;
    let total_payment = result.monthly_payment * payment_count(term_years)? as f64;

    Ok(LoanSummary {
        loan_amount,
        monthly_payment: result.monthly_payment,
        total_payment,
        total_interest: total_payment - loan_amount,
        amortization_schedule: result.schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_reference_payment() {
        // 450k home, 20% down, 6.5% for 30 years
        let payment = monthly_payment(360_000.0, 6.5, 30).unwrap();
        assert_abs_diff_eq!(payment, 2275.44, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_payment(120_000.0, 0.0, 10).unwrap();
        assert_eq!(payment, 120_000.0 / 120.0);
        assert_eq!(remaining_balance(120_000.0, 0.0, 10, 60).unwrap(), 60_000.0);
    }

    #[test]
    fn test_rejects_zero_term() {
        let err = monthly_payment(100_000.0, 5.0, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "term_years"));
    }

    #[test]
    fn test_rejects_term_too_long_to_count() {
        for years in [200_000_000, 400_000_000, u32::MAX] {
            let err = monthly_payment(100_000.0, 5.0, years).unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "term_years"));
            assert!(remaining_balance(100_000.0, 5.0, years, 0).is_err());
            assert!(schedule(100_000.0, 5.0, years).is_err());
        }
    }

    #[test]
    fn test_very_long_term_tends_to_interest_only() {
        // 100 million years still counts in an i32; the growth factor overflows
        let payment = monthly_payment(100_000.0, 6.0, 100_000_000).unwrap();
        assert_relative_eq!(payment, 500.0, max_relative = 1e-12);
        let balance = remaining_balance(100_000.0, 6.0, 100_000_000, 12).unwrap();
        assert_relative_eq!(balance, 100_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_negative_principal() {
        let err = schedule(-1.0, 5.0, 30).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "principal"));
    }

    #[test]
    fn test_rejects_payments_beyond_term() {
        assert!(remaining_balance(100_000.0, 5.0, 15, 181).is_err());
    }

    #[test]
    fn test_balance_endpoints() {
        assert_relative_eq!(remaining_balance(250_000.0, 7.0, 30, 0).unwrap(), 250_000.0, max_relative = 1e-9);
        assert_abs_diff_eq!(remaining_balance(250_000.0, 7.0, 30, 360).unwrap(), 0.0);
    }

    #[test]
    fn test_schedule_length_and_first_line() {
        let lines = schedule(360_000.0, 6.5, 30).unwrap();
        assert_eq!(lines.len(), 360);
        assert_eq!(lines[0].index, 1);
        assert_eq!(lines[359].index, 360);

        // First month interest is one month of rate on the full balance
        assert_relative_eq!(lines[0].interest_amount, 360_000.0 * 0.065 / 12.0, max_relative = 1e-12);
        assert_relative_eq!(
            lines[0].principal_amount + lines[0].interest_amount,
            lines[0].payment_amount,
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(lines[359].remaining_balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_schedule_is_restartable() {
        let a = schedule(200_000.0, 5.25, 15).unwrap();
        let b = schedule(200_000.0, 5.25, 15).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_principal_schedule() {
        let lines = schedule(0.0, 6.0, 15).unwrap();
        assert_eq!(lines.len(), 180);
        assert!(lines.iter().all(|l| l.payment_amount == 0.0 && l.remaining_balance == 0.0));
    }

    #[test]
    fn test_loan_summary_totals() {
        let summary = summarize_loan(450_000.0, 90_000.0, 6.5, 30).unwrap();
        assert_eq!(summary.loan_amount, 360_000.0);
        assert_relative_eq!(summary.total_payment, summary.monthly_payment * 360.0);
        assert_relative_eq!(summary.total_interest, summary.total_payment - 360_000.0);
        assert_eq!(summary.amortization_schedule.len(), 360);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_zero_rate_payment_is_exact(p in 0u32..2_000_000, t in 1u32..41) {
            let p = p as f64;
            prop_assert_eq!(monthly_payment(p, 0.0, t).unwrap(), p / (t * 12) as f64);
        }

        #[test]
        fn prop_principal_sums_to_loan(
            p in 1_000u32..2_000_000,
            rate_bp in 0u32..1500,
            t in 1u32..41,
        ) {
            let p = p as f64;
            let rate = rate_bp as f64 / 100.0;
            let lines = schedule(p, rate, t).unwrap();
            let total: f64 = lines.iter().map(|l| l.principal_amount).sum();
            prop_assert!(((total - p) / p).abs() < 1e-6, "sum {} vs {}", total, p);
        }

        #[test]
        fn prop_closed_form_matches_iteration(
            p in 1_000u32..2_000_000,
            rate_bp in 0u32..1500,
            t in 1u32..41,
        ) {
            let p = p as f64;
            let rate = rate_bp as f64 / 100.0;
            let lines = schedule(p, rate, t).unwrap();

            let mut iterative = p;
            for k in 0..=(t * 12) {
                if k > 0 {
                    iterative -= lines[(k - 1) as usize].principal_amount;
                }
                let closed = remaining_balance(p, rate, t, k).unwrap();
                // Near payoff both sides approach zero; compare against the principal there
                let scale = closed.abs().max(p * 1e-3);
                prop_assert!(
                    (closed - iterative).abs() / scale < 1e-6,
                    "k={} closed={} iterative={}", k, closed, iterative
                );
            }
        }
    }
}
