//! Mortgage Engine - loan math and rent-vs-buy projections
//!
//! This library provides:
//! - Fixed-rate amortization, extra-payment and refinance analysis
//! - Buy and rent scenario projection with break-even search
//! - Threshold-driven buy/rent recommendations
//! - LTV/DTI risk review and pre-approval checks
//! - Batch and sensitivity runs, exports and optional persistence

pub mod error;
pub mod inputs;
pub mod amortization;
pub mod assumptions;
pub mod projection;
pub mod risk;
pub mod scenario;
pub mod export;
pub mod store;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use inputs::ScenarioInput;
pub use assumptions::{Assumptions, DecisionThresholds, RiskBands, RiskLevel};
pub use amortization::{amortize, monthly_payment, remaining_balance, schedule, AmortizationResult, PaymentLine};
pub use projection::{
    Advantage, BuyingAnalysis, ComparisonAnalysis, ProjectionConfig, RecommendationResult,
    RentVsBuyEngine, RentVsBuyResult, RentingAnalysis, YearlyData,
};
pub use risk::RiskAssessor;
pub use scenario::{ScenarioRunner, SensitivityParameter};
