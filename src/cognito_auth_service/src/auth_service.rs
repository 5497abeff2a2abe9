use std::any::Any;

use axum::{
    Json, Router,
    http::{
        HeaderValue, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use cognito_auth_adapters::AllowedOrigins;
use cognito_auth_axum::{
    ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE, IdentityState, require_bearer,
    routes::{
        change_password, confirm_sign_up, forgot_password, forgot_password_code, health, me,
        sign_in, sign_out, sign_up,
    },
};
use cognito_auth_core::{AccessToken, AppClientId, AuthValidator, IdentityProvider};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

pub const API_PREFIX: &str = "/api/auth";

/// HTTP front of the identity provider: every auth route plus `/health`.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService
    ///
    /// # Arguments
    /// * `provider` - Identity provider client (must be Clone)
    /// * `client_id` - App client the public operations are issued for
    /// * `validator` - Gate for the routes that act on the caller's account
    pub fn new<P, V>(provider: P, client_id: AppClientId, validator: V) -> Self
    where
        P: IdentityProvider + Clone + 'static,
        V: AuthValidator<Claims = AccessToken, RequestParts = request::Parts>,
    {
        let state = IdentityState::new(provider, client_id);

        // Routes acting on the caller's account need a bearer token
        let protected = Router::new()
            .route("/changePassword", post(change_password::<P>))
            .route("/me", get(me::<P>))
            .route("/signOut", delete(sign_out::<P>))
            .route_layer(from_fn_with_state(validator, require_bearer::<V>));

        let api = Router::new()
            .route("/signUp", post(sign_up::<P>))
            .route("/confirmSignUp", post(confirm_sign_up::<P>))
            .route("/signIn", post(sign_in::<P>))
            .route("/forgotPasswordCode", get(forgot_password_code::<P>))
            .route("/forgotPassword", post(forgot_password::<P>))
            .merge(protected)
            .with_state(state);

        let router = Router::new()
            .nest(API_PREFIX, api)
            .route("/health", get(health))
            .layer(CatchPanicLayer::custom(handle_panic));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - CORS origins; any origin is allowed when `None`
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

        let cors = match allowed_origins {
            Some(allowed_origins) => cors.allow_credentials(true).allow_origin(
                AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ),
            ),
            None => cors.allow_origin(AnyOrigin),
        };

        self.router = self.router.layer(cors);
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server until Ctrl+C or SIGTERM
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(%detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down auth service");
}
