use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use cognito_auth_application::ConfirmForgotPasswordUseCase;
use cognito_auth_core::{ConfirmForgotPasswordRequest, IdentityProvider};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

/// Sets a new password using the code sent by `forgotPasswordCode`.
#[tracing::instrument(name = "Forgot Password", skip_all)]
pub async fn forgot_password<P>(
    State(state): State<IdentityState<P>>,
    WithRejection(Json(request), _): WithRejection<Json<ConfirmForgotPasswordRequest>, ApiError>,
) -> Result<StatusCode, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = ConfirmForgotPasswordUseCase::new(state.provider(), state.client_id());

    into_payload(use_case.execute(request).await)?;
    Ok(StatusCode::OK)
}
