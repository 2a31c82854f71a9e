//! Year-by-year buy and rent trajectories

use super::buy::{self, BuyingAnalysis};
use super::rent::{self, RentingAnalysis};
use crate::error::EngineResult;
use crate::inputs::ScenarioInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyData {
    pub year: u32,
    pub buying_cumulative_cost: f64,
    /// First-year rent carried flat; net worth uses the stepped total
    pub renting_cumulative_cost: f64,
    pub buying_net_worth: f64,
    pub renting_net_worth: f64,
}

/// One row per year for `1..=years`
pub fn build(
    input: &ScenarioInput,
    buying: &BuyingAnalysis,
    renting: &RentingAnalysis,
    years: u32,
) -> EngineResult<Vec<YearlyData>> {
    (1..=years)
        .map(|year| {
            Ok(YearlyData {
                year,
                buying_cumulative_cost: buy::total_cost_at_year(
                    buying.total_monthly_cost,
                    buying.initial_cash_outlay,
                    year,
                ),
                renting_cumulative_cost: renting.total_monthly_cost * 12.0 * year as f64
                    + renting.initial_deposit,
                buying_net_worth: buy::net_worth_at_year(input, buying, year)?,
                renting_net_worth: rent::net_worth_at_year(input, year),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_series(years: u32) -> Vec<YearlyData> {
        let input = ScenarioInput::default();
        let b = buy::analyze(&input).unwrap();
        let r = rent::analyze(&input);
        build(&input, &b, &r, years).unwrap()
    }

    #[test]
    fn test_ten_rows_in_order() {
        let series = default_series(10);
        assert_eq!(series.len(), 10);
        let years: Vec<u32> = series.iter().map(|row| row.year).collect();
        assert_eq!(years, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_rows_agree_with_analyses() {
        let input = ScenarioInput::default();
        let b = buy::analyze(&input).unwrap();
        let r = rent::analyze(&input);
        let series = build(&input, &b, &r, 10).unwrap();

        assert_eq!(series[4].buying_net_worth, b.net_worth_at_5_years);
        assert_eq!(series[9].renting_net_worth, r.net_worth_at_10_years);
        assert_relative_eq!(series[0].renting_cumulative_cost, 2_225.0 * 12.0 + 2_200.0);
    }

    // Costs are nominal sums while growth compounds; pinned so a switch to
    // discounting shows up here first.
    #[test]
    fn test_nominal_cost_regression() {
        let series = default_series(10);
        let first = series[0].buying_cumulative_cost;
        let step = series[1].buying_cumulative_cost - first;
        for pair in series.windows(2) {
            let delta = pair[1].buying_cumulative_cost - pair[0].buying_cumulative_cost;
            assert_relative_eq!(delta, step, max_relative = 1e-9);
        }
        assert!((series[9].buying_cumulative_cost - 462_714.12).abs() < 0.01);
        assert!((series[9].renting_net_worth - -134_737.09).abs() < 0.01);
    }

    #[test]
    fn test_empty_and_restartable() {
        assert!(default_series(0).is_empty());
        assert_eq!(default_series(10), default_series(10));
    }
}
