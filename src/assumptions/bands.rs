//! Underwriting risk bands for loan-to-value and debt-to-income

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Risk classification of a single ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn dti_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn ltv_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Good",
            RiskLevel::Medium => "Acceptable",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Upper bounds (inclusive, in whole percent) of the low and medium bands
#[derive(Debug, Clone, PartialEq)]
pub struct RiskBands {
    pub ltv_low_max: f64,
    pub ltv_medium_max: f64,
    pub dti_low_max: f64,
    pub dti_medium_max: f64,
    /// Maximum debt-to-income ratio (as a fraction) for pre-approval
    pub preapproval_max_dti: f64,
    /// Rough monthly payment per dollar borrowed used for pre-approval
    pub preapproval_payment_factor: f64,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            ltv_low_max: 80.0,
            ltv_medium_max: 90.0,
            dti_low_max: 28.0,
            dti_medium_max: 36.0,
            preapproval_max_dti: 0.43,
            // about 6% over 30 years
            preapproval_payment_factor: 0.005,
        }
    }
}

impl RiskBands {
    pub fn classify_ltv(&self, ltv_percent: f64) -> RiskLevel {
        band(ltv_percent, self.ltv_low_max, self.ltv_medium_max)
    }

    pub fn classify_dti(&self, dti_percent: f64) -> RiskLevel {
        band(dti_percent, self.dti_low_max, self.dti_medium_max)
    }

    /// Override one band by its CSV name
    pub fn set(&mut self, name: &str, value: f64) -> EngineResult<()> {
        match name {
            "ltv_low_max" => self.ltv_low_max = value,
            "ltv_medium_max" => self.ltv_medium_max = value,
            "dti_low_max" => self.dti_low_max = value,
            "dti_medium_max" => self.dti_medium_max = value,
            "preapproval_max_dti" => self.preapproval_max_dti = value,
            "preapproval_payment_factor" => self.preapproval_payment_factor = value,
            other => return Err(EngineError::UnknownThreshold(other.to_string())),
        }
        Ok(())
    }
}

// NaN compares false everywhere and lands in the high band
fn band(value: f64, low_max: f64, medium_max: f64) -> RiskLevel {
    if value <= low_max {
        RiskLevel::Low
    } else if value <= medium_max {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltv_band_edges() {
        let bands = RiskBands::default();
        assert_eq!(bands.classify_ltv(80.0), RiskLevel::Low);
        assert_eq!(bands.classify_ltv(81.0), RiskLevel::Medium);
        assert_eq!(bands.classify_ltv(90.0), RiskLevel::Medium);
        assert_eq!(bands.classify_ltv(91.0), RiskLevel::High);
    }

    #[test]
    fn test_dti_band_edges() {
        let bands = RiskBands::default();
        assert_eq!(bands.classify_dti(28.0), RiskLevel::Low);
        assert_eq!(bands.classify_dti(29.0), RiskLevel::Medium);
        assert_eq!(bands.classify_dti(36.0), RiskLevel::Medium);
        assert_eq!(bands.classify_dti(37.0), RiskLevel::High);
    }

    #[test]
    fn test_non_finite_ratios_are_high_risk() {
        let bands = RiskBands::default();
        assert_eq!(bands.classify_dti(f64::INFINITY), RiskLevel::High);
        assert_eq!(bands.classify_ltv(f64::NAN), RiskLevel::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::Medium.dti_label(), "Moderate Risk");
        assert_eq!(RiskLevel::Medium.ltv_label(), "Acceptable");
    }
}
