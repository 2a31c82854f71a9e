//! Load scenarios from CSV or JSON files

use super::ScenarioInput;
use crate::error::EngineResult;
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Load all scenarios from a CSV file with camelCase headers
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> EngineResult<Vec<ScenarioInput>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> EngineResult<Vec<ScenarioInput>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: ScenarioInput = result?;
        scenarios.push(row);
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load a single scenario from a JSON document
pub fn load_scenario_json<P: AsRef<Path>>(path: P) -> EngineResult<ScenarioInput> {
    let file = File::open(path)?;
    let input = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    const HEADER: &str = "homePrice,monthlyRent,downPaymentPercent,interestRatePercent,loanTermYears,\
closingCosts,propertyTaxRatePercent,homeInsuranceMonthly,maintenancePercentPerYear,hoaFeesMonthly,\
homeAppreciationPercentPerYear,rentIncreasePercentPerYear,investmentReturnPercentPerYear,\
inflationRatePercent,securityDeposit,rentersInsuranceMonthly";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!(
            "{}\n400000,2200,20,6.5,30,8000,1.2,200,1.5,0,3,3,7,2.5,2200,25\n\
             300000,1800,10,7,15,6000,1,150,1,50,2,4,6,2,1800,20\n",
            HEADER
        );
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0], ScenarioInput::default());
        assert_eq!(scenarios[1].loan_term_years, 15);
        assert_eq!(scenarios[1].hoa_fees_monthly, 50.0);
    }

    #[test]
    fn test_bad_row_is_csv_error() {
        let data = format!("{}\nnot-a-number,2200,20,6.5,30,8000,1.2,200,1.5,0,3,3,7,2.5,2200,25\n", HEADER);
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Csv(_)));
    }

    #[test]
    fn test_load_scenario_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        std::fs::write(&path, serde_json::to_string(&ScenarioInput::default()).unwrap()).unwrap();

        let input = load_scenario_json(&path).unwrap();
        assert_eq!(input, ScenarioInput::default());
    }
}
