//! Scenario inputs and loading

mod data;
pub mod loader;

pub use data::ScenarioInput;
pub use loader::{load_scenario_json, load_scenarios, load_scenarios_from_reader};
