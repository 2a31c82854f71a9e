//! Calculation history and saved calculator snapshots

use super::KeyValueStore;
use crate::amortization::{
    ExtraPaymentAnalysis, ExtraPaymentPlan, LoanSummary, RefinanceAnalysis, RefinanceRequest,
};
use crate::error::EngineResult;
use crate::inputs::ScenarioInput;
use crate::projection::RentVsBuyResult;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const HISTORY_KEY: &str = "mortgage_calculation_history";
pub const HISTORY_CAPACITY: usize = 10;

pub const RENT_VS_BUY_PREFIX: &str = "rent-vs-buy-calc-";
pub const EXTRA_PAYMENT_PREFIX: &str = "extra-payment-calc-";
pub const REFINANCE_PREFIX: &str = "refinance-calc-";

/// Most recent mortgage calculations, newest first
pub struct CalculationHistory<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CalculationHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored entries; an unreadable history is treated as empty
    pub fn entries(&self) -> EngineResult<Vec<LoanSummary>> {
        let Some(text) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&text) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log::error!("discarding unreadable calculation history: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Put `summary` at the front, dropping the oldest beyond capacity
    pub fn record(&mut self, summary: LoanSummary) -> EngineResult<()> {
        let mut entries = self.entries()?;
        entries.insert(0, summary);
        entries.truncate(HISTORY_CAPACITY);
        self.store.put(HISTORY_KEY, serde_json::to_string(&entries)?)
    }

    pub fn clear(&mut self) -> EngineResult<()> {
        self.store.remove(HISTORY_KEY)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Calculator inputs and result as saved by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation<I, R> {
    #[serde(flatten)]
    pub input: I,
    pub result: R,
    pub saved_at: DateTime<Utc>,
}

pub type SavedAnalysis = SavedCalculation<ScenarioInput, RentVsBuyResult>;
pub type SavedExtraPayment = SavedCalculation<ExtraPaymentInput, ExtraPaymentAnalysis>;
pub type SavedRefinance = SavedCalculation<RefinanceRequest, RefinanceAnalysis>;

/// Arguments of an extra-payment analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentInput {
    pub balance: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub plan: ExtraPaymentPlan,
}

impl<I, R> SavedCalculation<I, R> {
    pub fn new(input: I, result: R, saved_at: DateTime<Utc>) -> Self {
        Self { input, result, saved_at }
    }

    /// Storage key: `prefix` followed by the save time in epoch milliseconds
    pub fn key(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.saved_at.timestamp_millis())
    }
}

/// Save under a timestamped key and return that key
pub fn save_calculation<S, I, R>(
    store: &mut S,
    prefix: &str,
    calculation: &SavedCalculation<I, R>,
) -> EngineResult<String>
where
    S: KeyValueStore + ?Sized,
    I: Serialize,
    R: Serialize,
{
    let key = calculation.key(prefix);
    store.put(&key, serde_json::to_string(calculation)?)?;
    log::debug!("saved calculation {}", key);
    Ok(key)
}

/// Every calculation saved under `prefix`, oldest first
pub fn load_calculations<S, I, R>(store: &S, prefix: &str) -> EngineResult<Vec<(String, SavedCalculation<I, R>)>>
where
    S: KeyValueStore + ?Sized,
    I: DeserializeOwned,
    R: DeserializeOwned,
{
    let mut saved: Vec<(String, SavedCalculation<I, R>)> = Vec::new();
    for key in store.keys()? {
        if !key.starts_with(prefix) {
            continue;
        }
        if let Some(text) = store.get(&key)? {
            saved.push((key, serde_json::from_str(&text)?));
        }
    }
    saved.sort_by_key(|(_, calc)| calc.saved_at);
    Ok(saved)
}
