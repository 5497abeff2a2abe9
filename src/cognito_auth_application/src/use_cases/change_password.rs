use cognito_auth_core::{AccessToken, ChangePasswordInput, ChangePasswordRequest, IdentityProvider};

use super::{UseCaseResult, settle};

/// Change password use case - updates the password of the token's owner
pub struct ChangePasswordUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
}

impl<'a, P> ChangePasswordUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Execute the change password use case
    ///
    /// # Arguments
    /// * `request` - Previous and proposed password
    /// * `access_token` - Bearer token of the caller; a missing token is
    ///   forwarded as-is and rejected by the provider
    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: ChangePasswordRequest,
        access_token: Option<AccessToken>,
    ) -> UseCaseResult {
        tracing::info!("Change password request received");

        let outcome = self
            .provider
            .change_password(ChangePasswordInput {
                access_token: access_token.into(),
                previous_password: request.previous_password,
                proposed_password: request.proposed_password,
            })
            .await;

        settle("ChangePassword", outcome, |()| {
            tracing::info!("Password changed");
            Ok(())
        })
    }
}
