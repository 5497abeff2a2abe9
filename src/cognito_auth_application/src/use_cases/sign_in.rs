use cognito_auth_core::{
    AppClientId, AuthFlow, IdentityProvider, IdentityProviderError, InitiateAuthInput,
    SignInRequest, SignInResponse,
};

use super::{UseCaseResult, settle};

/// Sign-in use case - username/password authentication
pub struct SignInUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
    client_id: &'a AppClientId,
}

impl<'a, P> SignInUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(provider: &'a P, client_id: &'a AppClientId) -> Self {
        Self {
            provider,
            client_id,
        }
    }

    /// Execute the sign-in use case
    ///
    /// # Returns
    /// The provider's token bundle, unmodified. A response that asks for a
    /// further challenge instead of issuing tokens is an unexpected failure.
    #[tracing::instrument(
        name = "SignInUseCase::execute",
        skip_all,
        fields(username = %request.username)
    )]
    pub async fn execute(&self, request: SignInRequest) -> UseCaseResult<SignInResponse> {
        tracing::info!("Sign in request received");

        let outcome = self
            .provider
            .initiate_auth(InitiateAuthInput {
                client_id: self.client_id.clone(),
                flow: AuthFlow::UserPassword {
                    username: request.username,
                    password: request.password,
                },
            })
            .await;

        settle("InitiateAuth", outcome, |output| {
            let tokens = output.authentication_result.ok_or_else(|| {
                IdentityProviderError::UnexpectedResponse(format!(
                    "sign in returned challenge {} instead of tokens",
                    output.challenge_name.as_deref().unwrap_or("<none>")
                ))
            })?;

            tracing::info!("User signed in");

            Ok(SignInResponse {
                id_token: tokens.id_token,
                access_token: tokens.access_token,
                expires_in: tokens.expires_in,
                refresh_token: tokens.refresh_token,
            })
        })
    }
}
