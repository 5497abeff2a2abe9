use axum::{Extension, Json, extract::State};
use cognito_auth_application::GetMeUseCase;
use cognito_auth_core::{AccessToken, IdentityProvider, MeResponse};

use super::into_payload;
use crate::{error::ApiError, state::IdentityState};

/// Profile of the caller identified by the bearer token.
#[tracing::instrument(name = "Me", skip_all)]
pub async fn me<P>(
    State(state): State<IdentityState<P>>,
    Extension(access_token): Extension<AccessToken>,
) -> Result<Json<MeResponse>, ApiError>
where
    P: IdentityProvider + Clone + 'static,
{
    let use_case = GetMeUseCase::new(state.provider());

    into_payload(use_case.execute(Some(access_token)).await).map(Json)
}
