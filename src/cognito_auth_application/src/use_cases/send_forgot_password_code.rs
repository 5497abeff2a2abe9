use cognito_auth_core::{
    AppClientId, ForgotPasswordCodeRequest, ForgotPasswordCodeResponse, ForgotPasswordInput,
    IdentityProvider,
};

use super::{UseCaseResult, code_delivery_message, settle};

/// Forgot password use case - asks the provider to send a reset code
pub struct SendForgotPasswordCodeUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
    client_id: &'a AppClientId,
}

impl<'a, P> SendForgotPasswordCodeUseCase<'a, P>
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
        name = "SendForgotPasswordCodeUseCase::execute",
        skip_all,
        fields(username = %request.username)
    )]
    pub async fn execute(
        &self,
        request: ForgotPasswordCodeRequest,
    ) -> UseCaseResult<ForgotPasswordCodeResponse> {
        tracing::info!("Send forgot password code request received");

        let outcome = self
            .provider
            .forgot_password(ForgotPasswordInput {
                client_id: self.client_id.clone(),
                username: request.username,
            })
            .await;

        settle("ForgotPassword", outcome, |output| {
            tracing::info!("Forgot password code sent");

            Ok(ForgotPasswordCodeResponse {
                code_delivery_message: code_delivery_message(
                    "Reset Password Code",
                    output.code_delivery_details.as_ref(),
                ),
            })
        })
    }
}
