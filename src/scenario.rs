//! Scenario runner for batch and sensitivity runs
//!
//! Pre-loads assumptions once, then runs many rent-vs-buy scenarios without
//! re-reading CSV files. Scenarios are independent, so batches run in
//! parallel.

use crate::assumptions::Assumptions;
use crate::error::{EngineError, EngineResult};
use crate::inputs::ScenarioInput;
use crate::projection::{Advantage, ProjectionConfig, RentVsBuyEngine, RentVsBuyResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Input that a sensitivity sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensitivityParameter {
    HomePrice,
    MonthlyRent,
    DownPayment,
    InterestRate,
    HomeAppreciation,
    RentIncrease,
    InvestmentReturn,
}

impl SensitivityParameter {
    pub const ALL: [SensitivityParameter; 7] = [
        SensitivityParameter::HomePrice,
        SensitivityParameter::MonthlyRent,
        SensitivityParameter::DownPayment,
        SensitivityParameter::InterestRate,
        SensitivityParameter::HomeAppreciation,
        SensitivityParameter::RentIncrease,
        SensitivityParameter::InvestmentReturn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SensitivityParameter::HomePrice => "home-price",
            SensitivityParameter::MonthlyRent => "monthly-rent",
            SensitivityParameter::DownPayment => "down-payment",
            SensitivityParameter::InterestRate => "interest-rate",
            SensitivityParameter::HomeAppreciation => "home-appreciation",
            SensitivityParameter::RentIncrease => "rent-increase",
            SensitivityParameter::InvestmentReturn => "investment-return",
        }
    }

    /// Copy of `base` with this parameter set to `value`
    pub fn apply(&self, base: &ScenarioInput, value: f64) -> ScenarioInput {
        let mut input = base.clone();
        match self {
            SensitivityParameter::HomePrice => input.home_price = value,
            SensitivityParameter::MonthlyRent => input.monthly_rent = value,
            SensitivityParameter::DownPayment => input.down_payment_percent = value,
            SensitivityParameter::InterestRate => input.interest_rate_percent = value,
            SensitivityParameter::HomeAppreciation => input.home_appreciation_percent_per_year = value,
            SensitivityParameter::RentIncrease => input.rent_increase_percent_per_year = value,
            SensitivityParameter::InvestmentReturn => input.investment_return_percent_per_year = value,
        }
        input
    }
}

impl FromStr for SensitivityParameter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| EngineError::invalid("parameter", format!("unknown sensitivity parameter {:?}", s)))
    }
}

/// Headline figures for one point of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    pub value: f64,
    pub break_even_point: u32,
    pub five_year_savings: f64,
    pub ten_year_savings: f64,
    pub decision: Advantage,
    pub confidence: u8,
}

/// Pre-loaded scenario runner for batch projections
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base assumptions
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the standard thresholds
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::standard(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> EngineResult<Self> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &Path) -> EngineResult<Self> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    fn engine(&self) -> RentVsBuyEngine {
        RentVsBuyEngine::with_assumptions(self.base_assumptions.clone())
    }

    /// Run a single scenario
    pub fn run(&self, input: &ScenarioInput) -> EngineResult<RentVsBuyResult> {
        self.engine().run(input)
    }

    /// Run a single scenario with an explicit config
    pub fn run_with_config(&self, input: &ScenarioInput, config: ProjectionConfig) -> EngineResult<RentVsBuyResult> {
        RentVsBuyEngine::new(self.base_assumptions.clone(), config).run(input)
    }

    /// Run many scenarios in parallel; results keep input order
    pub fn run_batch(&self, inputs: &[ScenarioInput]) -> Vec<EngineResult<RentVsBuyResult>> {
        let engine = self.engine();
        inputs.par_iter().map(|input| engine.run(input)).collect()
    }

    /// Run `base` once per value of `parameter`
    pub fn sensitivity(
        &self,
        base: &ScenarioInput,
        parameter: SensitivityParameter,
        values: &[f64],
    ) -> EngineResult<Vec<SensitivityPoint>> {
        let engine = self.engine();
        values
            .par_iter()
            .map(|&value| {
                let result = engine.run(&parameter.apply(base, value))?;
                Ok(SensitivityPoint {
                    value,
                    break_even_point: result.break_even_point,
                    five_year_savings: result.comparison.five_year_savings,
                    ten_year_savings: result.comparison.ten_year_savings,
                    decision: result.recommendation.decision,
                    confidence: result.recommendation.confidence,
                })
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
