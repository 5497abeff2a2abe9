//! JSON bodies of the Cognito user pool API (`application/x-amz-json-1.1`).

use std::collections::HashMap;

use cognito_auth_core::{AuthenticationResult, CodeDeliveryDetails, UserAttribute};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct AttributeTypeRequest<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SignUpRequest<'a> {
    pub client_id: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub user_attributes: Vec<AttributeTypeRequest<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ConfirmSignUpRequest<'a> {
    pub client_id: &'a str,
    pub username: &'a str,
    pub confirmation_code: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InitiateAuthRequest<'a> {
    pub auth_flow: &'a str,
    pub client_id: &'a str,
    pub auth_parameters: HashMap<&'static str, &'a str>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ForgotPasswordRequest<'a> {
    pub client_id: &'a str,
    pub username: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ConfirmForgotPasswordRequest<'a> {
    pub client_id: &'a str,
    pub username: &'a str,
    pub confirmation_code: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ChangePasswordRequest<'a> {
    pub access_token: &'a str,
    pub previous_password: &'a str,
    pub proposed_password: &'a str,
}

/// Body of `GetUser` and `GlobalSignOut`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct AccessTokenRequest<'a> {
    pub access_token: &'a str,
}

#[derive(Deserialize, Debug)]
pub(super) struct EmptyResponse {}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct CodeDeliveryDetailsType {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub delivery_medium: String,
}

impl From<CodeDeliveryDetailsType> for CodeDeliveryDetails {
    fn from(details: CodeDeliveryDetailsType) -> Self {
        CodeDeliveryDetails {
            destination: details.destination,
            delivery_medium: details.delivery_medium,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SignUpResponse {
    pub user_sub: String,
    pub code_delivery_details: Option<CodeDeliveryDetailsType>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct AuthenticationResultType {
    pub id_token: String,
    pub access_token: String,
    pub expires_in: i32,
    pub refresh_token: String,
}

impl From<AuthenticationResultType> for AuthenticationResult {
    fn from(result: AuthenticationResultType) -> Self {
        AuthenticationResult {
            id_token: result.id_token,
            access_token: result.access_token,
            expires_in: result.expires_in,
            refresh_token: result.refresh_token,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InitiateAuthResponse {
    pub authentication_result: Option<AuthenticationResultType>,
    pub challenge_name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ForgotPasswordResponse {
    pub code_delivery_details: Option<CodeDeliveryDetailsType>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct AttributeTypeResponse {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl From<AttributeTypeResponse> for UserAttribute {
    fn from(attribute: AttributeTypeResponse) -> Self {
        UserAttribute {
            name: attribute.name,
            value: attribute.value,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(super) struct GetUserResponse {
    pub username: String,
    #[serde(default)]
    pub user_attributes: Vec<AttributeTypeResponse>,
    pub preferred_mfa_setting: Option<String>,
}

/// Error body returned with a non-2xx status.
#[derive(Deserialize, Debug, Default)]
pub(super) struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

/// Reduce `aws.protocoljson#UsernameExistsException:http://...` style type
/// names to the bare error code.
pub(super) fn normalize_error_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).trim()
}
