use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use cognito_auth_core::AuthValidator;

use crate::error::ApiError;

/// Middleware guarding protected routes.
///
/// Runs the validator against the request parts and, on success, puts the
/// claims into the request extensions where the route picks them up with
/// `Extension<V::Claims>`. Use with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer<V>(
    State(validator): State<V>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    V: AuthValidator<RequestParts = Parts>,
{
    let (parts, body) = request.into_parts();

    let claims = validator.validate(&parts).await.map_err(|e| {
        tracing::debug!(error = %e, "Rejected request without usable credentials");
        ApiError::Unauthenticated(e.to_string())
    })?;

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
