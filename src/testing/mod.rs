//! Scenario model and sequential runner
//!
//! Scenarios are ordered step lists, either loaded from YAML files or
//! built programmatically (the built-in CRUD suite). The runner threads a
//! session context through the steps and reports per-step outcomes.

pub mod config;
mod runner;
pub mod suite;

pub use config::{Expectation, TestScenario, TestStep};
pub use runner::{load_scenario, run_suite, SessionContext, StepOutcome, SuiteReport};
pub use suite::crud_suite;
