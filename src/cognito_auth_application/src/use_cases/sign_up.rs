use cognito_auth_core::{
    AppClientId, IdentityProvider, SignUpInput, SignUpRequest, SignUpResponse, UserAttribute,
};

use super::{UseCaseResult, code_delivery_message, settle};

const EMAIL_ATTRIBUTE: &str = "email";

/// Sign-up use case - registers a new account with the identity provider
pub struct SignUpUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
    client_id: &'a AppClientId,
}

impl<'a, P> SignUpUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(provider: &'a P, client_id: &'a AppClientId) -> Self {
        Self {
            provider,
            client_id,
        }
    }

    /// Execute the sign-up use case
    ///
    /// # Arguments
    /// * `request` - Username, email and password chosen by the caller
    ///
    /// # Returns
    /// The provider-assigned user id, the echoed email and a description of
    /// where the confirmation code was sent
    #[tracing::instrument(
        name = "SignUpUseCase::execute",
        skip_all,
        fields(username = %request.username)
    )]
    pub async fn execute(&self, request: SignUpRequest) -> UseCaseResult<SignUpResponse> {
        tracing::info!("Sign up request received");

        let email = request.email;
        let outcome = self
            .provider
            .sign_up(SignUpInput {
                client_id: self.client_id.clone(),
                username: request.username,
                password: request.password,
                user_attributes: vec![UserAttribute::new(EMAIL_ATTRIBUTE, email.clone())],
            })
            .await;

        settle("SignUp", outcome, |output| {
            tracing::info!(user_sub = %output.user_sub, "Sign up successful");

            Ok(SignUpResponse {
                user_id: output.user_sub,
                code_delivery_message: code_delivery_message(
                    "Confirmation Code",
                    output.code_delivery_details.as_ref(),
                ),
                email,
            })
        })
    }
}
