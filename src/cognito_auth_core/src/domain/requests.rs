//! Inbound request bodies, one per identity operation.
//!
//! Field validation is left to the identity provider; these types only carry
//! what the caller sent. Passwords and confirmation codes are wrapped in
//! [`Secret`] so they never show up in `Debug` output.

use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSignUpRequest {
    pub username: String,
    pub confirmation_code: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: Secret<String>,
}

/// Query parameters of the forgot-password code request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordCodeRequest {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmForgotPasswordRequest {
    pub username: String,
    pub confirmation_code: Secret<String>,
    pub password: Secret<String>,
}

/// Password change for the caller identified by the bearer token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub previous_password: Secret<String>,
    pub proposed_password: Secret<String>,
}
