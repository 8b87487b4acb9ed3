//! Bearer token acquisition
//!
//! Resolves a session token once at startup, either from a pre-issued
//! static token or by calling the authentication endpoint. A failed login
//! is fatal for the whole run.

use reqwest::StatusCode;
use tracing::debug;

use crate::common::{AuthMode, Error, Result};

use super::types::{LoginRequest, LoginResponse};

/// Path of the authentication endpoint
const AUTH_PATH: &str = "/api/User/Authentication";

/// Acquire the bearer token for this session
///
/// With a static token no network call is made. The login flow posts the
/// credentials and extracts `accessToken` from the response body.
pub async fn acquire_token(
    http: &reqwest::Client,
    base_url: &str,
    mode: &AuthMode,
) -> Result<String> {
    match mode {
        AuthMode::StaticToken(token) => {
            debug!("using static token");
            Ok(token.clone())
        }
        AuthMode::LoginFlow { email, password } => {
            debug!(%email, "logging in for a token");
            login(http, base_url, email, password).await
        }
    }
}

/// Call the authentication endpoint and extract the access token
async fn login(
    http: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<String> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), AUTH_PATH);

    let response = http
        .post(&url)
        .json(&LoginRequest { email, password })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    debug!(status = status.as_u16(), body = %body, "authentication response");

    if status != StatusCode::OK {
        return Err(Error::login_failed(status, body));
    }

    let parsed: LoginResponse = serde_json::from_str(&body)?;
    match parsed.access_token {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(Error::EmptyToken),
    }
}
