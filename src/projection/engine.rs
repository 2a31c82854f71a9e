//! Rent-vs-buy pipeline: analyze both paths, compare, recommend, project

use super::buy::{self, BuyingAnalysis};
use super::compare::{self, ComparisonAnalysis};
use super::recommend::{self, RecommendationResult};
use super::rent::{self, RentingAnalysis};
use super::series::{self, YearlyData};
use crate::assumptions::Assumptions;
use crate::error::EngineResult;
use crate::inputs::ScenarioInput;
use serde::{Deserialize, Serialize};

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Rows in the yearly comparison
    pub series_years: u32,

    /// Last year searched for a break-even
    pub break_even_max_year: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            series_years: 10,
            break_even_max_year: 20,
        }
    }
}

impl ProjectionConfig {
    /// Defaults with the break-even cap taken from the decision thresholds
    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        Self {
            break_even_max_year: assumptions.decision.break_even_max_year,
            ..Default::default()
        }
    }
}

/// Everything the rent-vs-buy calculator reports for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentVsBuyResult {
    pub buying: BuyingAnalysis,
    pub renting: RentingAnalysis,
    pub comparison: ComparisonAnalysis,
    /// First year buying pulls ahead, or the search cap
    pub break_even_point: u32,
    pub recommendation: RecommendationResult,
    pub yearly_comparison: Vec<YearlyData>,
}

/// Main rent-vs-buy engine
#[derive(Debug, Clone)]
pub struct RentVsBuyEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl RentVsBuyEngine {
    /// Create a new engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Engine whose break-even cap follows the assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        let config = ProjectionConfig::from_assumptions(&assumptions);
        Self::new(assumptions, config)
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the full pipeline for one scenario
    pub fn run(&self, input: &ScenarioInput) -> EngineResult<RentVsBuyResult> {
        let thresholds = &self.assumptions.decision;

        let buying = buy::analyze(input)?;
        let renting = rent::analyze(input);
        log::debug!(
            "buy monthly {:.2} vs rent monthly {:.2}",
            buying.total_monthly_cost,
            renting.total_monthly_cost
        );

        let comparison = compare::compare(&buying, &renting, thresholds);
        let break_even_point = compare::break_even(input, &buying, self.config.break_even_max_year)?;
        let recommendation = recommend::generate(&buying, &renting, &comparison, thresholds);
        let yearly_comparison = series::build(input, &buying, &renting, self.config.series_years)?;
        log::debug!(
            "decision {} ({}%), break-even year {}",
            recommendation.decision,
            recommendation.confidence,
            break_even_point
        );

        Ok(RentVsBuyResult {
            buying,
            renting,
            comparison,
            break_even_point,
            recommendation,
            yearly_comparison,
        })
    }
}

impl Default for RentVsBuyEngine {
    fn default() -> Self {
        Self::new(Assumptions::standard(), ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Advantage;

    #[test]
    fn test_default_scenario_runs() {
        let engine = RentVsBuyEngine::default();
        let result = engine.run(&ScenarioInput::default()).unwrap();

        assert!((1..=20).contains(&result.break_even_point));
        assert_eq!(result.yearly_comparison.len(), 10);
        assert_eq!(result.yearly_comparison[0].year, 1);
        assert_eq!(result.yearly_comparison[9].year, 10);
        assert_eq!(result.recommendation.decision, Advantage::Rent);
    }

    #[test]
    fn test_run_is_deterministic() {
        let engine = RentVsBuyEngine::default();
        let input = ScenarioInput::default();
        assert_eq!(engine.run(&input).unwrap(), engine.run(&input).unwrap());
    }

    #[test]
    fn test_config_controls_series_and_cap() {
        let config = ProjectionConfig { series_years: 15, break_even_max_year: 5 };
        let engine = RentVsBuyEngine::new(Assumptions::standard(), config);
        let result = engine.run(&ScenarioInput::default()).unwrap();

        assert_eq!(result.yearly_comparison.len(), 15);
        // Default scenario only crosses in year 16
        assert_eq!(result.break_even_point, 5);
    }

    #[test]
    fn test_dead_band_from_assumptions() {
        let mut assumptions = Assumptions::standard();
        assumptions.decision.advantage_dead_band = 1_000_000.0;
        let engine = RentVsBuyEngine::with_assumptions(assumptions);
        let result = engine.run(&ScenarioInput::default()).unwrap();

        assert_eq!(result.comparison.five_year_advantage, Advantage::Neutral);
        assert_eq!(result.recommendation.decision, Advantage::Neutral);
        assert_eq!(result.recommendation.confidence, 60);
    }

    #[test]
    fn test_zero_break_even_cap_is_invalid() {
        let config = ProjectionConfig { series_years: 10, break_even_max_year: 0 };
        let engine = RentVsBuyEngine::new(Assumptions::standard(), config);
        let err = engine.run(&ScenarioInput::default()).unwrap_err();
        assert!(matches!(err, crate::error::EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_term_propagates() {
        let input = ScenarioInput { loan_term_years: 0, ..Default::default() };
        assert!(RentVsBuyEngine::default().run(&input).is_err());
    }

    #[test]
    fn test_result_json_shape() {
        let result = RentVsBuyEngine::default().run(&ScenarioInput::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["buying"]["netWorthAt5Years"].is_number());
        assert!(json["renting"]["investmentGrowthAt10Years"].is_number());
        assert_eq!(json["recommendation"]["decision"], "rent");
        assert_eq!(json["yearlyComparison"].as_array().unwrap().len(), 10);
        assert!(json["breakEvenPoint"].is_u64());
    }
}
