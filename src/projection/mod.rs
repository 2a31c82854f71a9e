//! Rent-vs-buy projection: buy and rent analyzers, comparison,
//! recommendation and the yearly series

pub mod buy;
pub mod rent;
pub mod compare;
pub mod recommend;
pub mod series;
mod engine;

pub use buy::BuyingAnalysis;
pub use rent::RentingAnalysis;
pub use compare::{break_even, compare, Advantage, ComparisonAnalysis};
pub use recommend::{format_dollars, generate, RecommendationResult};
pub use series::YearlyData;
pub use engine::{ProjectionConfig, RentVsBuyEngine, RentVsBuyResult};
