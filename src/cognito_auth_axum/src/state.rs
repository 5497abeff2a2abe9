use cognito_auth_core::AppClientId;

/// Shared state of the identity routes: the provider client and the app
/// client every public operation is issued for.
#[derive(Debug, Clone)]
pub struct IdentityState<P> {
    provider: P,
    client_id: AppClientId,
}

impl<P> IdentityState<P> {
    pub fn new(provider: P, client_id: AppClientId) -> Self {
        Self {
            provider,
            client_id,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn client_id(&self) -> &AppClientId {
        &self.client_id
    }
}
