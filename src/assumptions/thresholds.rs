//! Cutoffs used by the rent-vs-buy comparison and recommendation rules

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionThresholds {
    /// Net worth gap (either direction) below which a horizon is neutral
    pub advantage_dead_band: f64,
    /// Ten-year buy savings that justify buying despite a short-term rent edge
    pub strong_long_term_savings: f64,
    /// Extra monthly cost of buying that tips a short-term rent edge to "rent"
    pub rent_monthly_difference: f64,
    /// Monthly cost gap worth calling out
    pub notable_monthly_difference: f64,
    /// Up-front cash worth calling out
    pub notable_initial_outlay: f64,
    /// Last year searched for a break-even, also returned when none is found
    pub break_even_max_year: u32,
    /// Longest closing-cost recovery for which refinancing is worthwhile
    pub refinance_max_break_even_months: u32,

    // Confidence reported by each recommendation rule
    pub confidence_consistent: u8,
    pub confidence_long_term_buy: u8,
    pub confidence_short_term_rent: u8,
    pub confidence_neutral: u8,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            advantage_dead_band: 1_000.0,
            strong_long_term_savings: 50_000.0,
            rent_monthly_difference: 500.0,
            notable_monthly_difference: 300.0,
            notable_initial_outlay: 50_000.0,
            break_even_max_year: 20,
            refinance_max_break_even_months: 60,
            confidence_consistent: 85,
            confidence_long_term_buy: 70,
            confidence_short_term_rent: 75,
            confidence_neutral: 60,
        }
    }
}

impl DecisionThresholds {
    /// Override one threshold by its CSV name
    pub fn set(&mut self, name: &str, value: f64) -> EngineResult<()> {
        match name {
            "advantage_dead_band" => self.advantage_dead_band = value,
            "strong_long_term_savings" => self.strong_long_term_savings = value,
            "rent_monthly_difference" => self.rent_monthly_difference = value,
            "notable_monthly_difference" => self.notable_monthly_difference = value,
            "notable_initial_outlay" => self.notable_initial_outlay = value,
            "break_even_max_year" => self.break_even_max_year = whole(name, value, 1, 100)?,
            "refinance_max_break_even_months" => {
                self.refinance_max_break_even_months = whole(name, value, 1, 600)?
            }
            "confidence_consistent" => self.confidence_consistent = whole(name, value, 0, 100)? as u8,
            "confidence_long_term_buy" => self.confidence_long_term_buy = whole(name, value, 0, 100)? as u8,
            "confidence_short_term_rent" => self.confidence_short_term_rent = whole(name, value, 0, 100)? as u8,
            "confidence_neutral" => self.confidence_neutral = whole(name, value, 0, 100)? as u8,
            other => return Err(EngineError::UnknownThreshold(other.to_string())),
        }
        Ok(())
    }
}

/// Accept only whole numbers inside `[min, max]`
pub(super) fn whole(name: &str, value: f64, min: u32, max: u32) -> EngineResult<u32> {
    if value.fract() != 0.0 || value < min as f64 || value > max as f64 {
        return Err(EngineError::invalid(
            name,
            format!("expected a whole number in [{}, {}], got {}", min, max, value),
        ));
    }
    Ok(value as u32)
}
