//! Underwriting review of a loan application

use super::ratios::{debt_to_income, debt_to_income_with_debts, loan_to_value};
use crate::amortization::monthly_payment;
use crate::assumptions::{RiskBands, RiskLevel};
use crate::error::EngineResult;
use serde::{Deserialize, Serialize};

/// Recurring monthly obligations other than the new mortgage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyDebts {
    pub credit_cards: f64,
    pub student_loans: f64,
    pub auto_loans: f64,
    pub other_debts: f64,
}

impl MonthlyDebts {
    pub fn total(&self) -> f64 {
        self.credit_cards + self.student_loans + self.auto_loans + self.other_debts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub loan_amount: f64,
    pub property_value: f64,
    pub annual_income: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: u32,
    /// Obligations other than this mortgage
    #[serde(default)]
    pub monthly_debts: MonthlyDebts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub monthly_payment: f64,
    pub loan_to_value: f64,
    pub ltv_risk: RiskLevel,
    pub debt_to_income: f64,
    pub dti_risk: RiskLevel,
    /// Including other monthly debts, unrounded
    pub total_debt_to_income: f64,
}

/// Applies the risk bands to loan applications
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    bands: RiskBands,
}

impl RiskAssessor {
    pub fn new(bands: RiskBands) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &RiskBands {
        &self.bands
    }

    pub fn assess(&self, application: &LoanApplication) -> EngineResult<RiskAssessment> {
        let payment = monthly_payment(
            application.loan_amount,
            application.interest_rate_percent,
            application.loan_term_years,
        )?;
        let ltv = loan_to_value(application.loan_amount, application.property_value);
        let dti = debt_to_income(payment, application.annual_income);

        if !ltv.is_finite() || !dti.is_finite() {
            log::warn!("non-finite risk ratio: ltv={} dti={}", ltv, dti);
        }

        Ok(RiskAssessment {
            monthly_payment: payment,
            loan_to_value: ltv,
            ltv_risk: self.bands.classify_ltv(ltv),
            debt_to_income: dti,
            dti_risk: self.bands.classify_dti(dti),
            total_debt_to_income: debt_to_income_with_debts(
                application.monthly_debts.total(),
                payment,
                application.annual_income,
            ),
        })
    }

    /// Quick pre-approval using a flat payment estimate per dollar borrowed
    pub fn preapproval_eligible(&self, annual_income: f64, loan_amount: f64, monthly_debts: f64) -> bool {
        let estimated_payment = loan_amount * self.bands.preapproval_payment_factor;
        let ratio = (monthly_debts + estimated_payment) / (annual_income / 12.0);
        ratio <= self.bands.preapproval_max_dti
    }
}
