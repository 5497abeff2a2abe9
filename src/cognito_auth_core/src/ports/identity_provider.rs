use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{access_token::AccessToken, app_client_id::AppClientId};

/// Failure of a call to the identity provider.
///
/// Only [`IdentityProviderError::Rejected`] is recoverable: the provider
/// answered and named the reason. Everything else is an unexpected failure
/// that the operation layer does not handle.
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Identity provider rejected the request with {code}: {message}")]
    Rejected { code: String, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl IdentityProviderError {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        IdentityProviderError::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Where and how the provider delivered a confirmation or reset code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDeliveryDetails {
    pub destination: String,
    pub delivery_medium: String,
}

#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub client_id: AppClientId,
    pub username: String,
    pub password: Secret<String>,
    pub user_attributes: Vec<UserAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutput {
    pub user_sub: String,
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

#[derive(Debug, Clone)]
pub struct ConfirmSignUpInput {
    pub client_id: AppClientId,
    pub username: String,
    pub confirmation_code: Secret<String>,
}

/// Authentication flow started by [`IdentityProvider::initiate_auth`].
#[derive(Debug, Clone)]
pub enum AuthFlow {
    UserPassword {
        username: String,
        password: Secret<String>,
    },
}

impl AuthFlow {
    /// Flow name as the provider knows it.
    pub fn name(&self) -> &'static str {
        match self {
            AuthFlow::UserPassword { .. } => "USER_PASSWORD_AUTH",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InitiateAuthInput {
    pub client_id: AppClientId,
    pub flow: AuthFlow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub id_token: String,
    pub access_token: String,
    pub expires_in: i32,
    pub refresh_token: String,
}

/// The provider either issues tokens or asks for a further challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiateAuthOutput {
    pub authentication_result: Option<AuthenticationResult>,
    pub challenge_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ForgotPasswordInput {
    pub client_id: AppClientId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordOutput {
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

#[derive(Debug, Clone)]
pub struct ConfirmForgotPasswordInput {
    pub client_id: AppClientId,
    pub username: String,
    pub confirmation_code: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub access_token: AccessToken,
    pub previous_password: Secret<String>,
    pub proposed_password: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct GetUserInput {
    pub access_token: AccessToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserOutput {
    pub username: String,
    pub user_attributes: Vec<UserAttribute>,
    pub preferred_mfa_setting: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GlobalSignOutInput {
    pub access_token: AccessToken,
}

/// Port to the managed identity provider that owns every account, password,
/// confirmation code and token.
///
/// Implementations are shared across concurrent requests and must be safe to
/// use from many tasks at once. Each method is exactly one remote call.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, input: SignUpInput) -> Result<SignUpOutput, IdentityProviderError>;

    async fn confirm_sign_up(&self, input: ConfirmSignUpInput)
    -> Result<(), IdentityProviderError>;

    async fn initiate_auth(
        &self,
        input: InitiateAuthInput,
    ) -> Result<InitiateAuthOutput, IdentityProviderError>;

    async fn forgot_password(
        &self,
        input: ForgotPasswordInput,
    ) -> Result<ForgotPasswordOutput, IdentityProviderError>;

    async fn confirm_forgot_password(
        &self,
        input: ConfirmForgotPasswordInput,
    ) -> Result<(), IdentityProviderError>;

    async fn change_password(&self, input: ChangePasswordInput)
    -> Result<(), IdentityProviderError>;

    async fn get_user(&self, input: GetUserInput) -> Result<GetUserOutput, IdentityProviderError>;

    /// Invalidates every token issued for the presented access token, not
    /// just the current session.
    async fn global_sign_out(&self, input: GlobalSignOutInput)
    -> Result<(), IdentityProviderError>;
}
