use cognito_auth_core::{AppClientId, ConfirmSignUpInput, ConfirmSignUpRequest, IdentityProvider};

use super::{UseCaseResult, settle};

/// Confirm sign-up use case - submits the confirmation code sent at sign-up
pub struct ConfirmSignUpUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
    client_id: &'a AppClientId,
}

impl<'a, P> ConfirmSignUpUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(provider: &'a P, client_id: &'a AppClientId) -> Self {
        Self {
            provider,
            client_id,
        }
    }

    #[tracing::instrument(
        name = "ConfirmSignUpUseCase::execute",
        skip_all,
        fields(username = %request.username)
    )]
    pub async fn execute(&self, request: ConfirmSignUpRequest) -> UseCaseResult {
        tracing::info!("Confirm sign up request received");

        let outcome = self
            .provider
            .confirm_sign_up(ConfirmSignUpInput {
                client_id: self.client_id.clone(),
                username: request.username,
                confirmation_code: request.confirmation_code,
            })
            .await;

        settle("ConfirmSignUp", outcome, |()| {
            tracing::info!("Sign up confirmed");
            Ok(())
        })
    }
}
