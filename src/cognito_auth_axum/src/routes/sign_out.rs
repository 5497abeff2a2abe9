use axum::{Extension, extract::State, http::StatusCode};
use cognito_auth_application::SignOutUseCase;
use cognito_auth_core::{AccessToken, IdentityProvider};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

/// Revokes every token issued to the caller.
#[tracing::instrument(name = "Sign Out", skip_all)]
pub async fn sign_out<P>(
    State(state): State<IdentityState<P>>,
    Extension(access_token): Extension<AccessToken>,
) -> Result<StatusCode, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = SignOutUseCase::new(state.provider());

    into_payload(use_case.execute(Some(access_token)).await)?;
    Ok(StatusCode::OK)
}
