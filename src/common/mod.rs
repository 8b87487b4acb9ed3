//! Common utilities shared across the harness

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::{AuthMode, Config};
pub use error::{Error, Result};
