use cognito_auth_core::{AccessToken, GlobalSignOutInput, IdentityProvider};

use super::{UseCaseResult, settle};

/// Sign-out use case - revokes every token issued for the caller
pub struct SignOutUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
}

impl<'a, P> SignOutUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Execute the sign-out use case
    ///
    /// This is a global sign-out: all sessions of the token's owner end, not
    /// only the one the token belongs to.
    #[tracing::instrument(name = "SignOutUseCase::execute", skip_all)]
    pub async fn execute(&self, access_token: Option<AccessToken>) -> UseCaseResult {
        tracing::info!("Sign out request received");

        let outcome = self
            .provider
            .global_sign_out(GlobalSignOutInput {
                access_token: access_token.into(),
            })
            .await;

        settle("GlobalSignOut", outcome, |()| {
            tracing::info!("User signed out of all sessions");
            Ok(())
        })
    }
}
