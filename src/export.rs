//! CSV and JSON exports of calculator results

use crate::amortization::PaymentLine;
use crate::error::EngineResult;
use crate::projection::YearlyData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write the yearly comparison as CSV with camelCase headers
pub fn write_series_csv<W: Write>(writer: W, rows: &[YearlyData]) -> EngineResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write an amortization table as CSV with camelCase headers
pub fn write_schedule_csv<W: Write>(writer: W, lines: &[PaymentLine]) -> EngineResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for line in lines {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Downloadable snapshot of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<C, R> {
    pub calculation: C,
    pub results: R,
    pub export_date: DateTime<Utc>,
}

impl<C: Serialize, R: Serialize> ExportEnvelope<C, R> {
    pub fn new(calculation: C, results: R, export_date: DateTime<Utc>) -> Self {
        Self { calculation, results, export_date }
    }

    /// e.g. `rent-vs-buy-analysis-2024-03-01.json`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}-{}.json", stem, self.export_date.format("%Y-%m-%d"))
    }

    pub fn to_json_pretty(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write into `dir` under [`Self::file_name`] and return the path
    pub fn write_to_dir(&self, dir: &Path, stem: &str) -> EngineResult<PathBuf> {
        let path = dir.join(self.file_name(stem));
        fs::write(&path, self.to_json_pretty()?)?;
        log::info!("exported {}", path.display());
        Ok(path)
    }
}
