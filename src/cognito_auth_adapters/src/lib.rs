//! Infrastructure adapters: the Cognito user pool client, configuration
//! loading and bearer token validation.

pub mod auth_validation;
pub mod cognito;
pub mod config;

pub use auth_validation::{BearerTokenValidator, TokenAuthError, extract_bearer_token};
pub use cognito::CognitoIdentityProvider;
pub use config::{AllowedOrigins, AuthServiceSettings, CognitoSettings, ConfigError, ServerSettings};
