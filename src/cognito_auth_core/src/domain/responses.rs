//! Response bodies returned to HTTP callers on success.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    /// Subject identifier assigned by the identity provider.
    pub user_id: String,
    pub email: String,
    pub code_delivery_message: String,
}

/// Token bundle issued by the identity provider, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub id_token: String,
    pub access_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i32,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordCodeResponse {
    pub code_delivery_message: String,
}

/// Profile of the caller identified by the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub username: String,
    pub preferred_mfa_setting: Option<String>,
    pub attributes: HashMap<String, String>,
}
