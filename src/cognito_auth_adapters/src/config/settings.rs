use std::time::Duration;

use ::config::{Config, Environment, File, FileFormat};
use http::HeaderValue;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{CONFIG_FILE, env, prod};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSettings {
    pub cognito: CognitoSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

impl AuthServiceSettings {
    /// Load settings from `.env`, the optional `config/default.json` and
    /// `COGNITO_AUTH__*` environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }

        Self::from_environment(Self::environment())
    }

    /// `COGNITO_AUTH__SECTION__KEY` variables; `server.allowed_origins` is a
    /// comma separated list.
    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator(env::ENV_SEPARATOR)
            .separator(env::ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
            .try_parsing(true)
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()?;

        settings.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let cognito = &self.cognito;
        if cognito.app_client_id.trim().is_empty() {
            return Err(ConfigError::Missing("cognito.app_client_id"));
        }
        if cognito.region.trim().is_empty() {
            return Err(ConfigError::Missing("cognito.region"));
        }
        if cognito.authority.trim().is_empty() {
            return Err(ConfigError::Missing("cognito.authority"));
        }
        cognito.endpoint_url()?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CognitoSettings {
    pub app_client_id: String,
    pub region: String,
    /// Issuer of the tokens the pool hands out.
    pub authority: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_in_millis")]
    pub timeout_in_millis: u64,
}

impl CognitoSettings {
    /// Provider URL, either the configured override or the regional
    /// user pool endpoint.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region),
        };

        Url::parse(&url).map_err(|e| ConfigError::InvalidUrl {
            url,
            reason: e.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

fn default_timeout_in_millis() -> u64 {
    prod::cognito::TIMEOUT_IN_MILLIS
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub allowed_origins: Option<AllowedOrigins>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            allowed_origins: None,
        }
    }
}

fn default_address() -> String {
    prod::APP_ADDRESS.to_string()
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(origins.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}
