//! Route handlers, one per identity operation.
//!
//! Public routes take the app client id from [`IdentityState`]; protected
//! routes expect the bearer gate to have placed an [`AccessToken`] in the
//! request extensions.
//!
//! [`IdentityState`]: crate::IdentityState
//! [`AccessToken`]: cognito_auth_core::AccessToken

pub mod change_password;
pub mod confirm_sign_up;
pub mod forgot_password;
pub mod forgot_password_code;
pub mod health;
pub mod me;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

pub use change_password::change_password;
pub use confirm_sign_up::confirm_sign_up;
pub use forgot_password::forgot_password;
pub use forgot_password_code::forgot_password_code;
pub use health::health;
pub use me::me;
pub use sign_in::sign_in;
pub use sign_out::sign_out;
pub use sign_up::sign_up;

use cognito_auth_application::UseCaseResult;

use crate::error::ApiError;

/// Unwrap a use case outcome into its payload or the error response.
pub(crate) fn into_payload<T>(result: UseCaseResult<T>) -> Result<T, ApiError> {
    Ok(result?.into_result()?)
}
