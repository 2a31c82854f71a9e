//! Decision thresholds and risk bands
//!
//! Every cutoff the recommendation and risk rules compare against lives here
//! so it can be tuned from CSV without touching the formulas.

mod thresholds;
mod bands;
pub mod loader;

pub use thresholds::DecisionThresholds;
pub use bands::{RiskBands, RiskLevel};
pub use loader::LoadedAssumptions;

use crate::error::EngineResult;
use std::path::Path;

/// Container for all tunable business assumptions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assumptions {
    pub decision: DecisionThresholds,
    pub risk: RiskBands,
}

impl Assumptions {
    /// Thresholds as shipped with the calculators
    pub fn standard() -> Self {
        Self {
            decision: DecisionThresholds::default(),
            risk: RiskBands::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> EngineResult<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> EngineResult<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Ok(Self {
            decision: loaded.decision,
            risk: loaded.risk,
        })
    }
}
