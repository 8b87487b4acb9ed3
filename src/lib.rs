//! Idea Center API test harness
//!
//! A client-side end-to-end suite for a remote "Idea" management service:
//! authenticate, then drive an ordered CRUD scenario and report per-step
//! pass/fail outcomes.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use api::{ApiCall, Envelope, IdeaClient, IdeaPayload};
pub use common::{AuthMode, Config, Error, Result};
pub use testing::{crud_suite, SessionContext, SuiteReport, TestScenario};
