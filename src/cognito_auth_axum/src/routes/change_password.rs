//! Password change for a signed-in user.
//!
//! Requires the bearer gate: the access token arrives via `Extension`.

use axum::{Extension, Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use cognito_auth_application::ChangePasswordUseCase;
use cognito_auth_core::{AccessToken, ChangePasswordRequest, IdentityProvider};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

#[tracing::instrument(name = "Change Password", skip_all)]
pub async fn change_password<P>(
    State(state): State<IdentityState<P>>,
    Extension(access_token): Extension<AccessToken>,
    WithRejection(Json(request), _): WithRejection<Json<ChangePasswordRequest>, ApiError>,
) -> Result<StatusCode, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.provider());

    into_payload(use_case.execute(request, Some(access_token)).await)?;
    Ok(StatusCode::OK)
}
