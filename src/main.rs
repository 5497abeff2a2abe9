use cognito_auth::{
    AppClientId, AuthService, AuthServiceSettings, BearerTokenValidator, CognitoIdentityProvider,
};
use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSettings::load()?;

    // Create the Cognito client
    let http_client = HttpClient::builder()
        .timeout(config.cognito.timeout())
        .build()?;
    let endpoint = config.cognito.endpoint_url()?;

    tracing::info!(
        region = %config.cognito.region,
        authority = %config.cognito.authority,
        endpoint = %endpoint,
        "Using Cognito user pool"
    );

    let provider = CognitoIdentityProvider::new(endpoint, http_client);

    let auth_service = AuthService::new(
        provider,
        AppClientId::new(config.cognito.app_client_id.clone()),
        BearerTokenValidator::new(),
    );

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!("Starting auth service...");

    auth_service
        .run_standalone(listener, config.server.allowed_origins.clone())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
