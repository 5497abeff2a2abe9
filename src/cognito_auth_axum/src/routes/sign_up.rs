use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use cognito_auth_application::SignUpUseCase;
use cognito_auth_core::{IdentityProvider, SignUpRequest, SignUpResponse};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

#[tracing::instrument(name = "Sign Up", skip_all)]
pub async fn sign_up<P>(
    State(state): State<IdentityState<P>>,
    WithRejection(Json(request), _): WithRejection<Json<SignUpRequest>, ApiError>,
) -> Result<Json<SignUpResponse>, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = SignUpUseCase::new(state.provider(), state.client_id());

    into_payload(use_case.execute(request).await).map(Json)
}
