use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use cognito_auth_application::ConfirmSignUpUseCase;
use cognito_auth_core::{ConfirmSignUpRequest, IdentityProvider};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

#[tracing::instrument(name = "Confirm Sign Up", skip_all)]
pub async fn confirm_sign_up<P>(
    State(state): State<IdentityState<P>>,
    WithRejection(Json(request), _): WithRejection<Json<ConfirmSignUpRequest>, ApiError>,
) -> Result<StatusCode, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = ConfirmSignUpUseCase::new(state.provider(), state.client_id());

    into_payload(use_case.execute(request).await)?;
    Ok(StatusCode::OK)
}
