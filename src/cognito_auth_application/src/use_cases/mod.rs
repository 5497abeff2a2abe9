//! One use case per identity operation.
//!
//! Every use case makes exactly one call to the [`IdentityProvider`] port.
//! Provider-reported errors are classified into a failed [`ServiceResult`];
//! any other failure is returned as `Err` and left to the HTTP boundary.
//!
//! [`IdentityProvider`]: cognito_auth_core::IdentityProvider

pub mod change_password;
pub mod confirm_forgot_password;
pub mod confirm_sign_up;
pub mod get_me;
pub mod send_forgot_password_code;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

#[cfg(test)]
pub(crate) mod test_support;

pub use change_password::ChangePasswordUseCase;
pub use confirm_forgot_password::ConfirmForgotPasswordUseCase;
pub use confirm_sign_up::ConfirmSignUpUseCase;
pub use get_me::GetMeUseCase;
pub use send_forgot_password_code::SendForgotPasswordCodeUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;

use cognito_auth_core::{CodeDeliveryDetails, IdentityProviderError, ServiceResult};

use crate::error_classifier::classify;

/// Outcome of a use case: a service result, or an unexpected provider failure.
pub type UseCaseResult<T = ()> = Result<ServiceResult<T>, IdentityProviderError>;

/// Turn a provider outcome into a use case outcome.
fn settle<R, T, F>(
    operation: &'static str,
    outcome: Result<R, IdentityProviderError>,
    on_success: F,
) -> UseCaseResult<T>
where
    F: FnOnce(R) -> Result<T, IdentityProviderError>,
{
    match outcome {
        Ok(response) => on_success(response).map(ServiceResult::success),
        Err(IdentityProviderError::Rejected { code, message }) => {
            tracing::error!(
                operation,
                code = %code,
                message = %message,
                "Identity provider rejected the request"
            );
            let (category, message) = classify(&code, &message);
            Ok(ServiceResult::error(category, message))
        }
        Err(error) => Err(error),
    }
}

fn code_delivery_message(code_name: &str, details: Option<&CodeDeliveryDetails>) -> String {
    match details {
        Some(details) => format!(
            "A {code_name} has been sent to {} via {}",
            details.destination, details.delivery_medium
        ),
        None => format!("No {code_name} was sent"),
    }
}
