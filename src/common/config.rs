//! Configuration file handling
//!
//! Settings come from a TOML file in the platform config directory with
//! environment-variable overrides layered on top. The base URL defaults to
//! the shared QA deployment; credentials have no default and must be
//! supplied through the file or the environment.

use serde::Deserialize;

use super::paths::config_path;
use super::{Error, Result};

/// Environment variable overriding the base URL
const ENV_BASE_URL: &str = "IDEAHUB_BASE_URL";
/// Environment variable supplying a static bearer token
const ENV_TOKEN: &str = "IDEAHUB_TOKEN";
/// Environment variable supplying the login email
const ENV_EMAIL: &str = "IDEAHUB_EMAIL";
/// Environment variable supplying the login password
const ENV_PASSWORD: &str = "IDEAHUB_PASSWORD";

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the Idea Center deployment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication settings
#[derive(Debug, Deserialize, Default)]
pub struct AuthConfig {
    /// Pre-issued bearer token; when non-empty, no login call is made
    #[serde(default)]
    pub static_token: Option<String>,

    /// Login email for the authentication endpoint
    #[serde(default)]
    pub email: Option<String>,

    /// Login password for the authentication endpoint
    #[serde(default)]
    pub password: Option<String>,
}

fn default_base_url() -> String {
    "http://softuni-qa-loadbalancer-2137572849.eu-north-1.elb.amazonaws.com:84".to_string()
}

/// How the session obtains its bearer token, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Use a pre-issued token directly
    StaticToken(String),
    /// Log in with credentials and extract the token from the response
    LoginFlow { email: String, password: String },
}

impl Config {
    /// Load configuration from the default config file and the environment
    ///
    /// A missing file yields the defaults; environment variables override
    /// whatever the file provided.
    pub fn load() -> Result<Self> {
        let mut config = if let Some(path) = config_path() {
            if path.exists() {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))?
            } else {
                Self::from_toml("")?
            }
        } else {
            Self::from_toml("")?
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Apply overrides from an environment-like lookup
    pub fn apply_overrides<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(token) = get(ENV_TOKEN) {
            self.auth.static_token = Some(token);
        }
        if let Some(email) = get(ENV_EMAIL) {
            self.auth.email = Some(email);
        }
        if let Some(password) = get(ENV_PASSWORD) {
            self.auth.password = Some(password);
        }
    }

    /// Resolve the authentication mode for this session
    ///
    /// A non-empty static token wins; otherwise login credentials are
    /// required. Whitespace-only tokens count as absent.
    pub fn auth_mode(&self) -> Result<AuthMode> {
        if let Some(token) = &self.auth.static_token {
            if !token.trim().is_empty() {
                return Ok(AuthMode::StaticToken(token.clone()));
            }
        }

        match (&self.auth.email, &self.auth.password) {
            (Some(email), Some(password))
                if !email.trim().is_empty() && !password.trim().is_empty() =>
            {
                Ok(AuthMode::LoginFlow {
                    email: email.clone(),
                    password: password.clone(),
                })
            }
            _ => Err(Error::Config(
                "no static token and no login credentials configured; \
                 set IDEAHUB_TOKEN or IDEAHUB_EMAIL/IDEAHUB_PASSWORD"
                    .to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.base_url.starts_with("http://"));
        assert!(config.auth.static_token.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml(
            r#"
            base_url = "http://localhost:8000"

            [auth]
            email = "qa@example.com"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(
            config.auth_mode().unwrap(),
            AuthMode::LoginFlow {
                email: "qa@example.com".to_string(),
                password: "hunter2".to_string(),
            }
        );
    }

    #[test]
    fn test_static_token_wins_over_credentials() {
        let config = Config::from_toml(
            r#"
            [auth]
            static_token = "abc123"
            email = "qa@example.com"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.auth_mode().unwrap(),
            AuthMode::StaticToken("abc123".to_string())
        );
    }

    #[test]
    fn test_blank_static_token_falls_through() {
        let config = Config::from_toml(
            r#"
            [auth]
            static_token = "   "
            email = "qa@example.com"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.auth_mode().unwrap(),
            AuthMode::LoginFlow { .. }
        ));
    }

    #[test]
    fn test_missing_credentials_is_config_error() {
        let config = Config::from_toml("").unwrap();
        assert!(matches!(config.auth_mode(), Err(Error::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::from_toml(
            r#"
            base_url = "http://localhost:8000"
            "#,
        )
        .unwrap();

        config.apply_overrides(|name| match name {
            "IDEAHUB_BASE_URL" => Some("http://qa.internal:84".to_string()),
            "IDEAHUB_TOKEN" => Some("env-token".to_string()),
            _ => None,
        });

        assert_eq!(config.base_url, "http://qa.internal:84");
        assert_eq!(
            config.auth_mode().unwrap(),
            AuthMode::StaticToken("env-token".to_string())
        );
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        assert!(matches!(
            Config::from_toml("base_url = ["),
            Err(Error::ConfigParse(_))
        ));
    }
}
