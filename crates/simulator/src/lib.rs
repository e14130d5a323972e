//! Console simulator for the goap-core agent.
//!
//! This crate is the composition root around the pure planning core: it
//! reads configuration from the environment, installs logging, rolls the
//! agent's initial attack flag with an injected RNG, runs the scenario and
//! renders the resulting state dumps as text or JSON.

pub mod config;
pub mod logging;
pub mod report;
pub mod scenario;

pub use config::{OutputFormat, SimConfig};
pub use report::{CycleSummary, ScenarioReport};
pub use scenario::run_scenario;
