//! Loan-to-value and debt-to-income ratios
//!
//! The plain variants divide without guarding, so a zero property value or
//! income yields `inf` or `NaN`. The `checked_` variants reject them instead.

use crate::error::{EngineError, EngineResult};

/// Loan amount as a whole percentage of property value
pub fn loan_to_value(loan_amount: f64, property_value: f64) -> f64 {
    (loan_amount / property_value * 100.0).round()
}

/// Mortgage payment as a whole percentage of monthly income
pub fn debt_to_income(monthly_payment: f64, annual_income: f64) -> f64 {
    (monthly_payment / (annual_income / 12.0) * 100.0).round()
}

/// All monthly obligations, mortgage included, as a percentage of monthly income
///
/// Not rounded.
pub fn debt_to_income_with_debts(monthly_debts: f64, monthly_payment: f64, annual_income: f64) -> f64 {
    (monthly_debts + monthly_payment) / (annual_income / 12.0) * 100.0
}

/// [`loan_to_value`], failing on a zero property value
pub fn checked_loan_to_value(loan_amount: f64, property_value: f64) -> EngineResult<f64> {
    if property_value == 0.0 {
        return Err(EngineError::DivisionByZero {
            context: "loan-to-value with zero property value".to_string(),
        });
    }
    Ok(loan_to_value(loan_amount, property_value))
}

/// [`debt_to_income`], failing on a zero income
pub fn checked_debt_to_income(monthly_payment: f64, annual_income: f64) -> EngineResult<f64> {
    if annual_income == 0.0 {
        return Err(EngineError::DivisionByZero {
            context: "debt-to-income with zero income".to_string(),
        });
    }
    Ok(debt_to_income(monthly_payment, annual_income))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltv_rounds_to_whole_percent() {
        assert_eq!(loan_to_value(360_000.0, 450_000.0), 80.0);
        assert_eq!(loan_to_value(405_500.0, 450_000.0), 90.0);
        assert_eq!(loan_to_value(0.0, 450_000.0), 0.0);
    }

    #[test]
    fn test_dti_rounds_to_whole_percent() {
        // 2,275.44 against 10,000 a month
        assert_eq!(debt_to_income(2_275.44, 120_000.0), 23.0);
        assert_eq!(debt_to_income(2_275.44, 80_000.0), 34.0);
    }

    #[test]
    fn test_zero_denominators_are_not_guarded() {
        assert!(loan_to_value(360_000.0, 0.0).is_infinite());
        assert!(loan_to_value(0.0, 0.0).is_nan());
        assert!(debt_to_income(2_000.0, 0.0).is_infinite());
        assert!(debt_to_income(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_checked_variants_reject_zero() {
        assert!(matches!(
            checked_loan_to_value(1.0, 0.0),
            Err(EngineError::DivisionByZero { .. })
        ));
        assert!(matches!(
            checked_debt_to_income(1.0, 0.0),
            Err(EngineError::DivisionByZero { .. })
        ));
        assert_eq!(checked_loan_to_value(360_000.0, 450_000.0).unwrap(), 80.0);
    }

    #[test]
    fn test_dti_with_debts_is_unrounded() {
        let ratio = debt_to_income_with_debts(500.0, 2_000.0, 90_000.0);
        assert!((ratio - 33.333_333).abs() < 1e-5);
    }
}
