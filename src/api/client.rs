//! Authenticated HTTP client for the Idea Center API
//!
//! The bearer token is installed as a default header so every request in
//! the session carries it. Responses are captured as status plus raw body:
//! the runner asserts on non-2xx responses too, so transport success and
//! API success are kept separate.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::common::{Error, Result};

use super::types::{Envelope, IdeaPayload};

/// Endpoint paths
const CREATE_PATH: &str = "/api/Idea/Create";
const LIST_PATH: &str = "/api/Idea/All";
const EDIT_PATH: &str = "/api/Idea/Edit";
const DELETE_PATH: &str = "/api/Idea/Delete";

/// A captured API response: status code plus raw body
#[derive(Debug, Clone)]
pub struct ApiCall {
    pub status: StatusCode,
    pub body: String,
}

impl ApiCall {
    /// Deserialize the captured body
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::from)
    }

    /// Parse the body as a single response envelope
    pub fn envelope(&self) -> Result<Envelope> {
        self.json()
    }

    /// Parse the body as the listing's ordered sequence of envelopes
    pub fn ideas(&self) -> Result<Vec<Envelope>> {
        self.json()
    }
}

/// Client for the Idea Center endpoints, bound to one bearer token
#[derive(Debug, Clone)]
pub struct IdeaClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdeaClient {
    /// Build a client with the token attached to all subsequent requests
    pub fn new(base_url: impl Into<String>, token: &str) -> Result<Self> {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| Error::InvalidToken(e.to_string()))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /api/Idea/Create` with a `{title, url, description}` body
    pub async fn create(&self, idea: &IdeaPayload) -> Result<ApiCall> {
        let response = self.http.post(self.url(CREATE_PATH)).json(idea).send().await?;
        Self::capture("create", response).await
    }

    /// `GET /api/Idea/All`
    pub async fn list(&self) -> Result<ApiCall> {
        let response = self.http.get(self.url(LIST_PATH)).send().await?;
        Self::capture("list", response).await
    }

    /// `PUT /api/Idea/Edit?ideaId=<id>` with a replacement body
    pub async fn edit(&self, idea_id: &str, idea: &IdeaPayload) -> Result<ApiCall> {
        let response = self
            .http
            .put(self.url(EDIT_PATH))
            .query(&[("ideaId", idea_id)])
            .json(idea)
            .send()
            .await?;
        Self::capture("edit", response).await
    }

    /// `DELETE /api/Idea/Delete?ideaId=<id>`
    pub async fn delete(&self, idea_id: &str) -> Result<ApiCall> {
        let response = self
            .http
            .delete(self.url(DELETE_PATH))
            .query(&[("ideaId", idea_id)])
            .send()
            .await?;
        Self::capture("delete", response).await
    }

    async fn capture(operation: &str, response: reqwest::Response) -> Result<ApiCall> {
        let status = response.status();
        let body = response.text().await?;
        debug!(operation, status = status.as_u16(), body = %body, "api response");
        Ok(ApiCall { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = IdeaClient::new("http://localhost:8000/", "token").unwrap();
        assert_eq!(
            client.url(CREATE_PATH),
            "http://localhost:8000/api/Idea/Create"
        );
    }

    #[test]
    fn test_rejects_token_with_control_characters() {
        assert!(matches!(
            IdeaClient::new("http://localhost:8000", "bad\ntoken"),
            Err(Error::InvalidToken(_))
        ));
    }

    #[test]
    fn test_api_call_envelope_parsing() {
        let call = ApiCall {
            status: StatusCode::OK,
            body: r#"{"msg":"Edited successfully"}"#.to_string(),
        };
        assert_eq!(
            call.envelope().unwrap().msg.as_deref(),
            Some("Edited successfully")
        );
    }

    #[test]
    fn test_api_call_rejects_malformed_body() {
        let call = ApiCall {
            status: StatusCode::OK,
            body: "not json".to_string(),
        };
        assert!(call.envelope().is_err());
    }
}
