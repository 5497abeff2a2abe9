//! Maps identity provider error codes onto [`ErrorCategory`].
//!
//! Only the codes listed in [`codes`] keep the provider's message. Anything
//! else is reported as [`ErrorCategory::ProviderError`] with a fixed message so
//! provider internals never reach the caller.

use cognito_auth_core::ErrorCategory;

/// Message used for every provider error outside the known codes.
pub const GENERIC_PROVIDER_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Error codes reported by the Cognito user pool API.
pub mod codes {
    pub const USERNAME_EXISTS: &str = "UsernameExistsException";
    pub const ALIAS_EXISTS: &str = "AliasExistsException";
    pub const INVALID_PARAMETER: &str = "InvalidParameterException";
    pub const INVALID_PASSWORD: &str = "InvalidPasswordException";
    pub const CODE_MISMATCH: &str = "CodeMismatchException";
    pub const EXPIRED_CODE: &str = "ExpiredCodeException";
    pub const LIMIT_EXCEEDED: &str = "LimitExceededException";
    pub const TOO_MANY_FAILED_ATTEMPTS: &str = "TooManyFailedAttemptsException";
    pub const USER_NOT_FOUND: &str = "UserNotFoundException";
    pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";
    pub const NOT_AUTHORIZED: &str = "NotAuthorizedException";
    pub const USER_NOT_CONFIRMED: &str = "UserNotConfirmedException";
}

/// Classify a provider error into a category and a caller-facing message.
pub fn classify(code: &str, message: &str) -> (ErrorCategory, String) {
    let category = match code {
        codes::USERNAME_EXISTS | codes::ALIAS_EXISTS => ErrorCategory::Conflict,
        codes::INVALID_PARAMETER
        | codes::INVALID_PASSWORD
        | codes::CODE_MISMATCH
        | codes::EXPIRED_CODE => ErrorCategory::InvalidParameter,
        codes::LIMIT_EXCEEDED => ErrorCategory::LimitExceeded,
        codes::TOO_MANY_FAILED_ATTEMPTS => ErrorCategory::TooManyFailedAttempts,
        codes::USER_NOT_FOUND | codes::RESOURCE_NOT_FOUND => ErrorCategory::NotFound,
        codes::NOT_AUTHORIZED | codes::USER_NOT_CONFIRMED => ErrorCategory::Unauthorized,
        _ => {
            return (
                ErrorCategory::ProviderError,
                GENERIC_PROVIDER_MESSAGE.to_string(),
            );
        }
    };

    (category, message.to_string())
}
