//! Refinance comparison: current loan against a replacement loan

use super::engine::{monthly_payment, payment_count};
use crate::error::EngineResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceRequest {
    pub current_balance: f64,
    pub current_rate_percent: f64,
    pub remaining_years: u32,
    pub new_rate_percent: f64,
    pub new_term_years: u32,
    pub closing_costs: f64,
    /// Equity taken out, added to the new loan balance
    #[serde(default)]
    pub cash_out: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceLoan {
    pub balance: f64,
    pub monthly_payment: f64,
    pub interest_rate_percent: f64,
    pub term_years: u32,
    pub total_interest: f64,
    pub total_cost: f64,
}

impl RefinanceLoan {
    fn price(balance: f64, rate_percent: f64, term_years: u32) -> EngineResult<Self> {
        let payment = monthly_payment(balance, rate_percent, term_years)?;
        let total_cost = payment * payment_count(term_years)? as f64;
        Ok(Self {
            balance,
            monthly_payment: payment,
            interest_rate_percent: rate_percent,
            term_years,
            total_interest: total_cost - balance,
            total_cost,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceSavings {
    /// Positive when the new payment is lower
    pub monthly_payment_savings: f64,
    pub total_interest_savings: f64,
    /// Interest savings net of closing costs
    pub lifetime_savings: f64,
    pub percentage_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceBreakEven {
    pub closing_costs: f64,
    /// `None` when the new payment is not lower, so closing costs are never recovered
    pub break_even_months: Option<u32>,
    pub worth_refinancing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefinanceVerdict {
    Recommended,
    BreakEvenTooLong,
    Marginal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceAnalysis {
    pub current_loan: RefinanceLoan,
    pub new_loan: RefinanceLoan,
    pub savings: RefinanceSavings,
    pub break_even: RefinanceBreakEven,
    pub verdict: RefinanceVerdict,
    pub message: String,
}

/// Price both loans and decide whether the switch pays for itself
///
/// Refinancing is worthwhile when closing costs are recovered within
/// `max_break_even_months` and lifetime savings are positive.
pub fn analyze_refinance(request: &RefinanceRequest, max_break_even_months: u32) -> EngineResult<RefinanceAnalysis> {
    let current = RefinanceLoan::price(
        request.current_balance,
        request.current_rate_percent,
        request.remaining_years,
    )?;
    let new = RefinanceLoan::price(
        request.current_balance + request.cash_out,
        request.new_rate_percent,
        request.new_term_years,
    )?;

    let monthly_payment_savings = current.monthly_payment - new.monthly_payment;
    let total_interest_savings = current.total_interest - new.total_interest;
    let lifetime_savings = total_interest_savings - request.closing_costs;
    let savings = RefinanceSavings {
        monthly_payment_savings,
        total_interest_savings,
        lifetime_savings,
        percentage_savings: lifetime_savings / current.total_cost * 100.0,
    };

    let break_even_months = if monthly_payment_savings > 0.0 {
        Some((request.closing_costs / monthly_payment_savings).ceil() as u32)
    } else {
        None
    };
    let worth_refinancing = matches!(break_even_months, Some(m) if m <= max_break_even_months)
        && lifetime_savings > 0.0;

    let (verdict, message) = match break_even_months {
        Some(months) if worth_refinancing => (
            RefinanceVerdict::Recommended,
            format!(
                "Refinancing is recommended. You would save ${:.0} monthly and break even in {} months.",
                monthly_payment_savings.abs(),
                months
            ),
        ),
        Some(months) if months > max_break_even_months => (
            RefinanceVerdict::BreakEvenTooLong,
            format!("Refinancing is not recommended. The break-even period is too long ({} months).", months),
        ),
        None => (
            RefinanceVerdict::BreakEvenTooLong,
            "Refinancing is not recommended. The new payment never recovers the closing costs.".to_string(),
        ),
        Some(months) => (
            RefinanceVerdict::Marginal,
            format!(
                "Refinancing may not be beneficial. Weigh your long-term plans against a break-even period of {} months.",
                months
            ),
        ),
    };

    Ok(RefinanceAnalysis {
        current_loan: current,
        new_loan: new,
        savings,
        break_even: RefinanceBreakEven {
            closing_costs: request.closing_costs,
            break_even_months,
            worth_refinancing,
        },
        verdict,
        message,
    })
}
