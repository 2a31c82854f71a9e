//! Buy path: monthly cost of ownership, equity and net worth by year

use crate::amortization::{monthly_payment, remaining_balance};
use crate::error::EngineResult;
use crate::inputs::ScenarioInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingAnalysis {
    pub monthly_payment: f64,
    /// Principal, interest, tax, insurance, maintenance and HOA
    pub total_monthly_cost: f64,
    pub down_payment: f64,
    pub closing_costs: f64,
    pub initial_cash_outlay: f64,
    /// First-year appreciation in dollars
    pub yearly_appreciation: f64,
    pub equity_built_at_year5: f64,
    pub total_cost_at_5_years: f64,
    pub total_cost_at_10_years: f64,
    pub net_worth_at_5_years: f64,
    pub net_worth_at_10_years: f64,
}

/// Monthly cost, cash outlay and 5/10-year equity and net worth of buying
///
/// Fails when the loan terms cannot be amortized.
pub fn analyze(input: &ScenarioInput) -> EngineResult<BuyingAnalysis> {
    let down_payment = input.down_payment();
    let payment = monthly_payment(
        input.loan_amount(),
        input.interest_rate_percent,
        input.loan_term_years,
    )?;

    let monthly_tax = input.home_price * input.property_tax_rate_percent / 100.0 / 12.0;
    let monthly_maintenance = input.home_price * input.maintenance_percent_per_year / 100.0 / 12.0;
    let total_monthly_cost = payment
        + monthly_tax
        + input.home_insurance_monthly
        + monthly_maintenance
        + input.hoa_fees_monthly;
    let initial_cash_outlay = down_payment + input.closing_costs;

    let cost_at = |year: u32| total_cost_at_year(total_monthly_cost, initial_cash_outlay, year);
    let equity_5 = equity_at_year(input, 5)?;
    let equity_10 = equity_at_year(input, 10)?;

    Ok(BuyingAnalysis {
        monthly_payment: payment,
        total_monthly_cost,
        down_payment,
        closing_costs: input.closing_costs,
        initial_cash_outlay,
        yearly_appreciation: input.home_price * input.home_appreciation_percent_per_year / 100.0,
        equity_built_at_year5: equity_5,
        total_cost_at_5_years: cost_at(5),
        total_cost_at_10_years: cost_at(10),
        net_worth_at_5_years: equity_5 - cost_at(5),
        net_worth_at_10_years: equity_10 - cost_at(10),
    })
}

/// Home value after `year` years of compound appreciation
pub fn home_value_at_year(input: &ScenarioInput, year: u32) -> f64 {
    input.home_price * (1.0 + input.home_appreciation_percent_per_year / 100.0).powi(year as i32)
}

/// Home value less the outstanding loan balance
///
/// Past the end of the loan term the balance is zero.
pub fn equity_at_year(input: &ScenarioInput, year: u32) -> EngineResult<f64> {
    let payments_made = year
        .saturating_mul(12)
        .min(input.loan_term_years.saturating_mul(12));
    let balance = remaining_balance(
        input.loan_amount(),
        input.interest_rate_percent,
        input.loan_term_years,
        payments_made,
    )?;
    Ok(home_value_at_year(input, year) - balance)
}

/// Nominal cash paid into the home by the end of `year`
pub fn total_cost_at_year(total_monthly_cost: f64, initial_cash_outlay: f64, year: u32) -> f64 {
    total_monthly_cost * 12.0 * year as f64 + initial_cash_outlay
}

/// Equity less everything paid in, with costs summed undiscounted
pub fn net_worth_at_year(input: &ScenarioInput, buying: &BuyingAnalysis, year: u32) -> EngineResult<f64> {
    let cost = total_cost_at_year(buying.total_monthly_cost, buying.initial_cash_outlay, year);
    Ok(equity_at_year(input, year)? - cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_scenario_costs() {
        let input = ScenarioInput::default();
        let buy = analyze(&input).unwrap();

        assert_relative_eq!(buy.down_payment, 80_000.0);
        assert_relative_eq!(buy.initial_cash_outlay, 88_000.0);
        // 320k at 6.5% over 30 years
        assert!((buy.monthly_payment - 2022.62).abs() < 0.01);

        let expected = buy.monthly_payment + 400.0 + 200.0 + 500.0;
        assert_relative_eq!(buy.total_monthly_cost, expected, max_relative = 1e-12);
        assert_relative_eq!(buy.yearly_appreciation, 12_000.0);
    }

    #[test]
    fn test_horizon_fields_match_year_formulas() {
        let input = ScenarioInput::default();
        let buy = analyze(&input).unwrap();

        assert_eq!(buy.net_worth_at_5_years, net_worth_at_year(&input, &buy, 5).unwrap());
        assert_eq!(buy.net_worth_at_10_years, net_worth_at_year(&input, &buy, 10).unwrap());
        assert_eq!(buy.equity_built_at_year5, equity_at_year(&input, 5).unwrap());
        assert_relative_eq!(
            buy.total_cost_at_10_years,
            buy.total_monthly_cost * 120.0 + 88_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_equity_grows_with_appreciation() {
        let flat = ScenarioInput { home_appreciation_percent_per_year: 0.0, ..Default::default() };
        let rising = ScenarioInput { home_appreciation_percent_per_year: 5.0, ..Default::default() };
        assert!(equity_at_year(&rising, 5).unwrap() > equity_at_year(&flat, 5).unwrap());
    }

    #[test]
    fn test_equity_after_payoff_is_home_value() {
        let input = ScenarioInput { loan_term_years: 10, ..Default::default() };
        let equity = equity_at_year(&input, 15).unwrap();
        assert_relative_eq!(equity, home_value_at_year(&input, 15), max_relative = 1e-9);
    }

    #[test]
    fn test_uncountable_term_is_rejected() {
        let input = ScenarioInput { loan_term_years: u32::MAX, ..Default::default() };
        assert!(analyze(&input).is_err());
        assert!(equity_at_year(&input, 5).is_err());
    }

    #[test]
    fn test_zero_term_is_rejected() {
        let input = ScenarioInput { loan_term_years: 0, ..Default::default() };
        assert!(analyze(&input).is_err());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let input = ScenarioInput::default();
        assert_eq!(analyze(&input).unwrap(), analyze(&input).unwrap());
    }
}
