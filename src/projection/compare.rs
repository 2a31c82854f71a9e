//! Head-to-head comparison of the buy and rent paths

use super::buy::{self, BuyingAnalysis};
use super::rent::{self, RentingAnalysis};
use crate::assumptions::DecisionThresholds;
use crate::error::{EngineError, EngineResult};
use crate::inputs::ScenarioInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which path comes out ahead; also used for the final decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advantage {
    Buy,
    Rent,
    Neutral,
}

impl Advantage {
    /// Classify a buy-minus-rent net worth gap
    pub fn from_savings(savings: f64, dead_band: f64) -> Self {
        if savings > dead_band {
            Advantage::Buy
        } else if savings < -dead_band {
            Advantage::Rent
        } else {
            Advantage::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Advantage::Buy => "buy",
            Advantage::Rent => "rent",
            Advantage::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonAnalysis {
    /// Buy minus rent; positive when buying costs more each month
    pub monthly_difference: f64,
    pub cash_outlay_difference: f64,
    pub five_year_advantage: Advantage,
    pub ten_year_advantage: Advantage,
    /// Buy net worth minus rent net worth
    pub five_year_savings: f64,
    pub ten_year_savings: f64,
}

/// Buy minus rent differences, with each horizon's savings classified
/// against the dead band
pub fn compare(
    buying: &BuyingAnalysis,
    renting: &RentingAnalysis,
    thresholds: &DecisionThresholds,
) -> ComparisonAnalysis {
    let five_year_savings = buying.net_worth_at_5_years - renting.net_worth_at_5_years;
    let ten_year_savings = buying.net_worth_at_10_years - renting.net_worth_at_10_years;
    let band = thresholds.advantage_dead_band;

    ComparisonAnalysis {
        monthly_difference: buying.total_monthly_cost - renting.total_monthly_cost,
        cash_outlay_difference: buying.initial_cash_outlay - renting.initial_deposit,
        five_year_advantage: Advantage::from_savings(five_year_savings, band),
        ten_year_advantage: Advantage::from_savings(ten_year_savings, band),
        five_year_savings,
        ten_year_savings,
    }
}

/// First year in `1..=max_year` where buying net worth exceeds renting
///
/// Returns `max_year` when buying never pulls ahead. A zero cap is rejected
/// so the result is always a year of at least 1.
pub fn break_even(input: &ScenarioInput, buying: &BuyingAnalysis, max_year: u32) -> EngineResult<u32> {
    if max_year == 0 {
        return Err(EngineError::invalid("break_even_max_year", "must be at least 1"));
    }
    for year in 1..=max_year {
        let buying_net_worth = buy::net_worth_at_year(input, buying, year)?;
        if buying_net_worth > rent::net_worth_at_year(input, year) {
            return Ok(year);
        }
    }
    log::warn!("buying never overtakes renting within {} years", max_year);
    Ok(max_year)
}
