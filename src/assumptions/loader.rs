//! CSV-based assumption loader
//!
//! Loads `name,value` override files from data/assumptions/. Names not
//! listed keep their standard value; unknown names are rejected.

use super::{DecisionThresholds, RiskBands};
use crate::error::{EngineError, EngineResult};
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const DECISION_THRESHOLDS_FILE: &str = "decision_thresholds.csv";
pub const RISK_BANDS_FILE: &str = "risk_bands.csv";

/// Load `name,value` rows from a CSV file
pub fn load_named_values(path: &Path) -> EngineResult<Vec<(String, f64)>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut values = Vec::new();

    for result in reader.records() {
        let record = result?;
        let name = record.get(0).unwrap_or_default().trim().to_string();
        let raw = record.get(1).unwrap_or_default().trim();
        let value: f64 = raw.parse().map_err(|_| EngineError::Parse {
            field: name.clone(),
            value: raw.to_string(),
        })?;
        values.push((name, value));
    }

    Ok(values)
}

/// Load decision thresholds, applying overrides on top of the defaults
pub fn load_decision_thresholds(path: &Path) -> EngineResult<DecisionThresholds> {
    let mut thresholds = DecisionThresholds::default();
    for (name, value) in load_named_values(&path.join(DECISION_THRESHOLDS_FILE))? {
        thresholds.set(&name, value)?;
    }
    Ok(thresholds)
}

/// Load risk bands, applying overrides on top of the defaults
pub fn load_risk_bands(path: &Path) -> EngineResult<RiskBands> {
    let mut bands = RiskBands::default();
    for (name, value) in load_named_values(&path.join(RISK_BANDS_FILE))? {
        bands.set(&name, value)?;
    }
    Ok(bands)
}

/// All assumptions loaded from one directory
pub struct LoadedAssumptions {
    pub decision: DecisionThresholds,
    pub risk: RiskBands,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> EngineResult<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> EngineResult<Self> {
        let loaded = Self {
            decision: load_decision_thresholds(path)?,
            risk: load_risk_bands(path)?,
        };
        log::info!("loaded assumptions from {}", path.display());
        Ok(loaded)
    }
}
