//! Admin risk review: LTV, DTI and pre-approval

mod assessor;
mod ratios;

pub use assessor::{LoanApplication, MonthlyDebts, RiskAssessment, RiskAssessor};
pub use ratios::{
    checked_debt_to_income, checked_loan_to_value, debt_to_income, debt_to_income_with_debts,
    loan_to_value,
};
pub use crate::assumptions::{RiskBands, RiskLevel};
