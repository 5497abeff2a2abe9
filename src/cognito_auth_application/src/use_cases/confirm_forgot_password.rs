use cognito_auth_core::{
    AppClientId, ConfirmForgotPasswordInput, ConfirmForgotPasswordRequest, IdentityProvider,
};

use super::{UseCaseResult, settle};

/// Confirm forgot password use case - sets a new password using a reset code
pub struct ConfirmForgotPasswordUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
    client_id: &'a AppClientId,
}

impl<'a, P> ConfirmForgotPasswordUseCase<'a, P>
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
        name = "ConfirmForgotPasswordUseCase::execute",
        skip_all,
        fields(username = %request.username)
    )]
    pub async fn execute(&self, request: ConfirmForgotPasswordRequest) -> UseCaseResult {
        tracing::info!("Confirm forgot password request received");

        let outcome = self
            .provider
            .confirm_forgot_password(ConfirmForgotPasswordInput {
                client_id: self.client_id.clone(),
                username: request.username,
                confirmation_code: request.confirmation_code,
                password: request.password,
            })
            .await;

        settle("ConfirmForgotPassword", outcome, |()| {
            tracing::info!("Password reset confirmed");
            Ok(())
        })
    }
}
