//! Wire types for the Idea Center API
//!
//! Field names follow the service's camelCase JSON conventions.

use serde::{Deserialize, Serialize};

/// Request body for creating or editing an idea
///
/// The service assigns the identifier; `url` may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdeaPayload {
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub description: String,
}

impl IdeaPayload {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Response envelope returned by the mutation endpoints and the listing
///
/// Mutations carry `msg`; listing entries carry `ideaId`. Both fields are
/// optional because the service mixes the two shapes freely.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    pub msg: Option<String>,
    pub idea_id: Option<String>,
    pub title: Option<String>,
}

/// Body for the authentication endpoint
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful authentication response
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}
