//! Optional persistence for calculation history and saved analyses
//!
//! The engine never touches a store; callers hand one in when they want
//! results kept between runs.

mod memory;
mod file;
mod history;

pub use memory::MemoryStore;
pub use file::JsonFileStore;
pub use history::{
    load_calculations, save_calculation, CalculationHistory, ExtraPaymentInput, SavedAnalysis,
    SavedCalculation, SavedExtraPayment, SavedRefinance, EXTRA_PAYMENT_PREFIX, HISTORY_CAPACITY, HISTORY_KEY, REFINANCE_PREFIX, RENT_VS_BUY_PREFIX,
};

use crate::error::EngineResult;

/// String key to string value storage
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Insert or replace the value under `key`
    fn put(&mut self, key: &str, value: String) -> EngineResult<()>;

    /// Remove `key`; missing keys are not an error
    fn remove(&mut self, key: &str) -> EngineResult<()>;

    /// All keys in ascending order
    fn keys(&self) -> EngineResult<Vec<String>>;
}
