use std::collections::HashMap;

use cognito_auth_core::{AccessToken, GetUserInput, IdentityProvider, MeResponse};

use super::{UseCaseResult, settle};

/// Get profile use case - returns the profile of the token's owner
pub struct GetMeUseCase<'a, P>
where
    P: IdentityProvider,
{
    provider: &'a P,
}

impl<'a, P> GetMeUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Execute the get profile use case
    ///
    /// The provider's attribute list is flattened into a map. Attribute names
    /// are unique on the provider side; should one repeat, the last wins.
    #[tracing::instrument(name = "GetMeUseCase::execute", skip_all)]
    pub async fn execute(&self, access_token: Option<AccessToken>) -> UseCaseResult<MeResponse> {
        tracing::info!("Get me request received");

        let outcome = self
            .provider
            .get_user(GetUserInput {
                access_token: access_token.into(),
            })
            .await;

        settle("GetUser", outcome, |output| {
            tracing::info!(username = %output.username, "Profile retrieved");

            let attributes: HashMap<String, String> = output
                .user_attributes
                .into_iter()
                .map(|attribute| (attribute.name, attribute.value))
                .collect();

            Ok(MeResponse {
                username: output.username,
                preferred_mfa_setting: output.preferred_mfa_setting,
                attributes,
            })
        })
    }
}
