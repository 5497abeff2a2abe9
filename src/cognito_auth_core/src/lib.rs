pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::AccessToken,
    app_client_id::AppClientId,
    error_category::ErrorCategory,
    requests::{
        ChangePasswordRequest, ConfirmForgotPasswordRequest, ConfirmSignUpRequest,
        ForgotPasswordCodeRequest, SignInRequest, SignUpRequest,
    },
    responses::{ForgotPasswordCodeResponse, MeResponse, SignInResponse, SignUpResponse},
    service_result::{ServiceError, ServiceResult},
};

pub use ports::identity_provider::{
    AuthFlow, AuthenticationResult, ChangePasswordInput, CodeDeliveryDetails,
    ConfirmForgotPasswordInput, ConfirmSignUpInput, ForgotPasswordInput, ForgotPasswordOutput,
    GetUserInput, GetUserOutput, GlobalSignOutInput, IdentityProvider, IdentityProviderError,
    InitiateAuthInput, InitiateAuthOutput, SignUpInput, SignUpOutput, UserAttribute,
};

pub use strategies::auth_validator::AuthValidator;
