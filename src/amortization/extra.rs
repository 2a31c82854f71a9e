//! Prepayment analysis: how extra principal shortens a loan
//!
//! The regular payment stays at the level annuity payment for the remaining
//! term. Extra principal is applied after the regular split and never takes
//! the balance below zero.

use super::engine::{monthly_payment, payment_count};
use crate::error::EngineResult;
use serde::{Deserialize, Serialize};

/// Balance below this is treated as paid off (half a cent of float noise)
const PAYOFF_EPSILON: f64 = 0.005;

/// Monthly extras compared in the standard scenario sweep
pub const STANDARD_MONTHLY_EXTRAS: [f64; 4] = [50.0, 100.0, 200.0, 500.0];

/// When and how much extra principal is paid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtraPaymentPlan {
    None,
    /// Same extra amount with every payment
    Monthly { amount: f64 },
    /// Extra amount with every 12th payment
    Yearly { amount: f64 },
    /// Single lump sum with the given payment number
    #[serde(rename_all = "camelCase")]
    OneTime { amount: f64, payment_number: u32 },
}

impl ExtraPaymentPlan {
    fn extra_for(&self, payment_number: u32) -> f64 {
        match *self {
            ExtraPaymentPlan::None => 0.0,
            ExtraPaymentPlan::Monthly { amount } => amount,
            ExtraPaymentPlan::Yearly { amount } if payment_number % 12 == 0 => amount,
            ExtraPaymentPlan::OneTime { amount, payment_number: at } if payment_number == at => amount,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentLine {
    pub payment_number: u32,
    pub regular_payment: f64,
    pub extra_payment: f64,
    pub total_payment: f64,
    /// Scheduled principal plus the extra
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
    pub cumulative_interest: f64,
}

/// Lifetime view of one repayment path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    pub balance: f64,
    pub monthly_payment: f64,
    pub total_payments: u32,
    pub total_interest: f64,
    pub total_cost: f64,
    /// Rounded to one decimal
    pub years_to_payoff: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSavings {
    pub interest_saved: f64,
    pub months_saved: u32,
    pub percentage_saved: f64,
    pub total_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdown {
    pub year: u32,
    pub total_paid: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub extra_paid: f64,
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalBreakdown {
    pub total_regular_payments: f64,
    pub total_extra_payments: f64,
    pub total_interest_paid: f64,
    pub total_amount_paid: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentScenario {
    pub extra_payment: f64,
    pub months_saved: u32,
    pub interest_saved: f64,
    pub total_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentAnalysis {
    pub original_loan: LoanDetails,
    pub with_extra_payment: LoanDetails,
    pub savings: PayoffSavings,
    pub payment_schedule: Vec<ExtraPaymentLine>,
    pub totals: TotalBreakdown,
    pub scenarios: Vec<ExtraPaymentScenario>,
}

impl ExtraPaymentAnalysis {
    /// Payments falling in the given loan year (1-indexed)
    pub fn yearly_breakdown(&self, year: u32) -> YearlyBreakdown {
        let first = (year.max(1) - 1).saturating_mul(12).saturating_add(1);
        let last = year.saturating_mul(12);
        let lines: Vec<&ExtraPaymentLine> = self
            .payment_schedule
            .iter()
            .filter(|l| l.payment_number >= first && l.payment_number <= last)
            .collect();

        YearlyBreakdown {
            year,
            total_paid: lines.iter().map(|l| l.total_payment).sum(),
            principal_paid: lines.iter().map(|l| l.principal_paid).sum(),
            interest_paid: lines.iter().map(|l| l.interest_paid).sum(),
            extra_paid: lines.iter().map(|l| l.extra_payment).sum(),
            remaining_balance: lines.last().map(|l| l.remaining_balance).unwrap_or(0.0),
        }
    }
}

/// Compare the scheduled payoff with an accelerated one
pub fn analyze_extra_payments(
    loan_balance: f64,
    annual_rate_percent: f64,
    remaining_years: u32,
    plan: ExtraPaymentPlan,
) -> EngineResult<ExtraPaymentAnalysis> {
    let payment = monthly_payment(loan_balance, annual_rate_percent, remaining_years)?;
    let n = payment_count(remaining_years)?;
    let original = original_details(loan_balance, payment, n);

    let lines = accelerated_schedule(loan_balance, annual_rate_percent, n, payment, plan);
    let with_extra = details_from_lines(loan_balance, payment, &lines);
    let savings = savings_between(&original, &with_extra);

    let scenarios = STANDARD_MONTHLY_EXTRAS
        .iter()
        .map(|&amount| {
            let plan = ExtraPaymentPlan::Monthly { amount };
            let lines = accelerated_schedule(loan_balance, annual_rate_percent, n, payment, plan);
            let details = details_from_lines(loan_balance, payment, &lines);
            let s = savings_between(&original, &details);
            ExtraPaymentScenario {
                extra_payment: amount,
                months_saved: s.months_saved,
                interest_saved: s.interest_saved,
                total_savings: s.total_savings,
            }
        })
        .collect();

    let total_regular: f64 = lines.iter().map(|l| l.regular_payment).sum();
    let total_extra: f64 = lines.iter().map(|l| l.extra_payment).sum();
    let totals = TotalBreakdown {
        total_regular_payments: total_regular,
        total_extra_payments: total_extra,
        total_interest_paid: lines.iter().map(|l| l.interest_paid).sum(),
        total_amount_paid: total_regular + total_extra,
    };

    log::debug!(
        "extra payments: {} -> {} payments, {:.2} interest saved",
        original.total_payments,
        with_extra.total_payments,
        savings.interest_saved
    );

    Ok(ExtraPaymentAnalysis {
        original_loan: original,
        with_extra_payment: with_extra,
        savings,
        payment_schedule: lines,
        totals,
        scenarios,
    })
}

fn original_details(balance: f64, payment: f64, n: u32) -> LoanDetails {
    let total_cost = payment * n as f64;
    LoanDetails {
        balance,
        monthly_payment: payment,
        total_payments: n,
        total_interest: total_cost - balance,
        total_cost,
        years_to_payoff: (n / 12) as f64,
    }
}

fn accelerated_schedule(
    loan_balance: f64,
    annual_rate_percent: f64,
    max_payments: u32,
    payment: f64,
    plan: ExtraPaymentPlan,
) -> Vec<ExtraPaymentLine> {
    let r = annual_rate_percent / 100.0 / 12.0;

    let mut lines = Vec::with_capacity(max_payments as usize);
    let mut balance = loan_balance;
    let mut cumulative_interest = 0.0;
    let mut count = 0;

    while balance > PAYOFF_EPSILON && count < max_payments {
        count += 1;
        let interest = balance * r;
        let principal = (payment - interest).min(balance);
        let extra = plan.extra_for(count).max(0.0).min(balance - principal);

        cumulative_interest += interest;
        balance -= principal + extra;
        if balance < PAYOFF_EPSILON {
            balance = 0.0;
        }

        lines.push(ExtraPaymentLine {
            payment_number: count,
            regular_payment: payment,
            extra_payment: extra,
            total_payment: payment + extra,
            principal_paid: principal + extra,
            interest_paid: interest,
            remaining_balance: balance,
            cumulative_interest,
        });
    }

    lines
}

// Regular payments are counted in full, including the final one.
fn details_from_lines(balance: f64, payment: f64, lines: &[ExtraPaymentLine]) -> LoanDetails {
    let count = lines.len() as u32;
    let total_cost: f64 = lines.iter().map(|l| l.total_payment).sum();
    LoanDetails {
        balance: lines.last().map(|l| l.remaining_balance).unwrap_or(balance),
        monthly_payment: payment,
        total_payments: count,
        total_interest: lines.last().map(|l| l.cumulative_interest).unwrap_or(0.0),
        total_cost,
        years_to_payoff: (count as f64 / 12.0 * 10.0).round() / 10.0,
    }
}

fn savings_between(original: &LoanDetails, accelerated: &LoanDetails) -> PayoffSavings {
    let interest_saved = original.total_interest - accelerated.total_interest;
    let percentage_saved = if original.total_interest > 0.0 {
        interest_saved / original.total_interest * 100.0
    } else {
        0.0
    };

    PayoffSavings {
        interest_saved,
        months_saved: original.total_payments.saturating_sub(accelerated.total_payments),
        percentage_saved,
        total_savings: original.total_cost - accelerated.total_cost,
    }
}
