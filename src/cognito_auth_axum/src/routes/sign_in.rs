use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use cognito_auth_application::SignInUseCase;
use cognito_auth_core::{IdentityProvider, SignInRequest, SignInResponse};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

/// Exchanges username and password for the provider's tokens.
#[tracing::instrument(name = "Sign In", skip_all)]
pub async fn sign_in<P>(
    State(state): State<IdentityState<P>>,
    WithRejection(Json(request), _): WithRejection<Json<SignInRequest>, ApiError>,
) -> Result<Json<SignInResponse>, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = SignInUseCase::new(state.provider(), state.client_id());

    into_payload(use_case.execute(request).await).map(Json)
}
