//! Rent path: escalating rent against the invested purchase cash

use crate::inputs::ScenarioInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentingAnalysis {
    pub monthly_rent: f64,
    /// Rent plus renter's insurance, first year
    pub total_monthly_cost: f64,
    pub initial_deposit: f64,
    /// Annual rent increase, percent
    pub yearly_rent_increase: f64,
    pub total_cost_at_5_years: f64,
    pub total_cost_at_10_years: f64,
    pub investment_growth_at_5_years: f64,
    pub investment_growth_at_10_years: f64,
    pub net_worth_at_5_years: f64,
    pub net_worth_at_10_years: f64,
}

/// Monthly cost, deposit and 5/10-year cost and net worth of renting
pub fn analyze(input: &ScenarioInput) -> RentingAnalysis {
    let cost_5 = cumulative_cost_at_year(input, 5);
    let cost_10 = cumulative_cost_at_year(input, 10);
    let growth_5 = investment_growth_at_year(input, 5);
    let growth_10 = investment_growth_at_year(input, 10);

    RentingAnalysis {
        monthly_rent: input.monthly_rent,
        total_monthly_cost: input.monthly_rent + input.renters_insurance_monthly,
        initial_deposit: input.security_deposit,
        yearly_rent_increase: input.rent_increase_percent_per_year,
        total_cost_at_5_years: cost_5,
        total_cost_at_10_years: cost_10,
        investment_growth_at_5_years: growth_5,
        investment_growth_at_10_years: growth_10,
        net_worth_at_5_years: growth_5 - cost_5,
        net_worth_at_10_years: growth_10 - cost_10,
    }
}

/// Deposit plus rent and insurance paid through the end of `year`
///
/// Rent steps up once per year; insurance stays flat.
pub fn cumulative_cost_at_year(input: &ScenarioInput, year: u32) -> f64 {
    let step = 1.0 + input.rent_increase_percent_per_year / 100.0;
    let mut total = input.security_deposit;
    let mut rent = input.monthly_rent;
    for _ in 0..year {
        total += (rent + input.renters_insurance_monthly) * 12.0;
        rent *= step;
    }
    total
}

/// Down payment and closing costs left invested instead of buying
pub fn investment_growth_at_year(input: &ScenarioInput, year: u32) -> f64 {
    input.opportunity_principal()
        * (1.0 + input.investment_return_percent_per_year / 100.0).powi(year as i32)
}

/// Invested deposit growth less cumulative rent paid through `year`
pub fn net_worth_at_year(input: &ScenarioInput, year: u32) -> f64 {
    investment_growth_at_year(input, year) - cumulative_cost_at_year(input, year)
}
