use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use cognito_auth_application::SendForgotPasswordCodeUseCase;
use cognito_auth_core::{ForgotPasswordCodeRequest, ForgotPasswordCodeResponse, IdentityProvider};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

/// `GET /forgotPasswordCode?username=...`
#[tracing::instrument(name = "Forgot Password Code", skip_all)]
pub async fn forgot_password_code<P>(
    State(state): State<IdentityState<P>>,
    WithRejection(Query(request), _): WithRejection<Query<ForgotPasswordCodeRequest>, ApiError>,
) -> Result<Json<ForgotPasswordCodeResponse>, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = SendForgotPasswordCodeUseCase::new(state.provider(), state.client_id());

    into_payload(use_case.execute(request).await).map(Json)
}
