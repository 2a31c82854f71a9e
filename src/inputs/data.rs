//! Rent-vs-buy scenario input
//!
//! Percentages are carried as entered (6.5 means 6.5%), never as decimals.
//! Values are validated by the caller before they reach the engine.

use serde::{Deserialize, Serialize};

/// Everything the buy and rent analyzers need for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub home_price: f64,
    pub monthly_rent: f64,

    /// Down payment as a percentage of the home price (0-100)
    pub down_payment_percent: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: u32,
    pub closing_costs: f64,

    // Ownership running costs
    pub property_tax_rate_percent: f64,
    pub home_insurance_monthly: f64,
    pub maintenance_percent_per_year: f64,
    #[serde(default)]
    pub hoa_fees_monthly: f64,

    // Growth assumptions
    pub home_appreciation_percent_per_year: f64,
    pub rent_increase_percent_per_year: f64,
    pub investment_return_percent_per_year: f64,

    /// Collected for completeness; no formula reads it
    #[serde(default)]
    pub inflation_rate_percent: f64,

    // Renting costs
    pub security_deposit: f64,
    pub renters_insurance_monthly: f64,
}

impl ScenarioInput {
    /// Cash put down at purchase
    pub fn down_payment(&self) -> f64 {
        self.home_price * self.down_payment_percent / 100.0
    }

    /// Financed amount: home price less the down payment
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment()
    }

    /// Up-front cash a renter keeps invested instead of buying
    pub fn opportunity_principal(&self) -> f64 {
        self.down_payment() + self.closing_costs
    }
}

impl Default for ScenarioInput {
    /// The calculator's starting values
    fn default() -> Self {
        Self {
            home_price: 400_000.0,
            monthly_rent: 2_200.0,
            down_payment_percent: 20.0,
            interest_rate_percent: 6.5,
            loan_term_years: 30,
            closing_costs: 8_000.0,
            property_tax_rate_percent: 1.2,
            home_insurance_monthly: 200.0,
            maintenance_percent_per_year: 1.5,
            hoa_fees_monthly: 0.0,
            home_appreciation_percent_per_year: 3.0,
            rent_increase_percent_per_year: 3.0,
            investment_return_percent_per_year: 7.0,
            inflation_rate_percent: 2.5,
            security_deposit: 2_200.0,
            renters_insurance_monthly: 25.0,
        }
    }
}
