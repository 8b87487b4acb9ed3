//! HTTP layer for the Idea Center service

pub mod auth;
pub mod client;
pub mod types;

pub use auth::acquire_token;
pub use client::{ApiCall, IdeaClient};
pub use types::{Envelope, IdeaPayload};
