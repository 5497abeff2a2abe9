pub mod constants;
mod settings;

pub use settings::{AllowedOrigins, AuthServiceSettings, CognitoSettings, ConfigError, ServerSettings};
