use std::collections::HashMap;

use async_trait::async_trait;
use cognito_auth_core::{
    AuthFlow, ChangePasswordInput, ConfirmForgotPasswordInput, ConfirmSignUpInput,
    ForgotPasswordInput, ForgotPasswordOutput, GetUserInput, GetUserOutput, GlobalSignOutInput,
    IdentityProvider, IdentityProviderError, InitiateAuthInput, InitiateAuthOutput, SignUpInput,
    SignUpOutput,
};
use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};

use super::wire;

const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_HEADER: &str = "X-Amz-Target";
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// [`IdentityProvider`] backed by the Cognito user pool JSON API.
///
/// Every operation used here is public to app clients, so requests carry the
/// app client id or the caller's access token instead of request signatures.
/// Cloning is cheap: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct CognitoIdentityProvider {
    http_client: Client,
    endpoint: Url,
}

impl CognitoIdentityProvider {
    pub fn new(endpoint: Url, http_client: Client) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    #[tracing::instrument(name = "Calling Cognito", skip(self, body))]
    async fn call<B, R>(&self, operation: &'static str, body: &B) -> Result<R, IdentityProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| {
            IdentityProviderError::UnexpectedResponse(format!(
                "failed to encode {operation} request: {e}"
            ))
        })?;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
            .header(TARGET_HEADER, format!("{TARGET_PREFIX}.{operation}"))
            .body(payload)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let error_type_header = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| IdentityProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(decode_error(
                operation,
                status,
                error_type_header.as_deref(),
                &bytes,
            ));
        }

        let bytes: &[u8] = if bytes.is_empty() { b"{}" } else { &bytes };
        serde_json::from_slice(bytes).map_err(|e| {
            IdentityProviderError::UnexpectedResponse(format!(
                "failed to decode {operation} response: {e}"
            ))
        })
    }
}

/// Build the error for a non-2xx response. A response naming an error code is
/// a rejection; anything else is an unexpected response.
fn decode_error(
    operation: &str,
    status: StatusCode,
    error_type_header: Option<&str>,
    body: &[u8],
) -> IdentityProviderError {
    let error: wire::ErrorResponse = serde_json::from_slice(body).unwrap_or_default();

    let code = error
        .error_type
        .as_deref()
        .or(error_type_header)
        .map(wire::normalize_error_code)
        .filter(|code| !code.is_empty());

    match code {
        Some(code) => IdentityProviderError::rejected(code, error.message.unwrap_or_default()),
        None => IdentityProviderError::UnexpectedResponse(format!(
            "{operation} failed with status {status} and no error code"
        )),
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn sign_up(&self, input: SignUpInput) -> Result<SignUpOutput, IdentityProviderError> {
        let request = wire::SignUpRequest {
            client_id: input.client_id.as_str(),
            username: &input.username,
            password: input.password.expose_secret(),
            user_attributes: input
                .user_attributes
                .iter()
                .map(|attribute| wire::AttributeTypeRequest {
                    name: &attribute.name,
                    value: &attribute.value,
                })
                .collect(),
        };

        let response: wire::SignUpResponse = self.call("SignUp", &request).await?;

        Ok(SignUpOutput {
            user_sub: response.user_sub,
            code_delivery_details: response.code_delivery_details.map(Into::into),
        })
    }

    async fn confirm_sign_up(
        &self,
        input: ConfirmSignUpInput,
    ) -> Result<(), IdentityProviderError> {
        let request = wire::ConfirmSignUpRequest {
            client_id: input.client_id.as_str(),
            username: &input.username,
            confirmation_code: input.confirmation_code.expose_secret(),
        };

        let _: wire::EmptyResponse = self.call("ConfirmSignUp", &request).await?;
        Ok(())
    }

    async fn initiate_auth(
        &self,
        input: InitiateAuthInput,
    ) -> Result<InitiateAuthOutput, IdentityProviderError> {
        let auth_flow = input.flow.name();
        let auth_parameters = match &input.flow {
            AuthFlow::UserPassword { username, password } => HashMap::from([
                ("USERNAME", username.as_str()),
                ("PASSWORD", password.expose_secret().as_str()),
            ]),
        };
        let request = wire::InitiateAuthRequest {
            auth_flow,
            client_id: input.client_id.as_str(),
            auth_parameters,
        };

        let response: wire::InitiateAuthResponse = self.call("InitiateAuth", &request).await?;

        Ok(InitiateAuthOutput {
            authentication_result: response.authentication_result.map(Into::into),
            challenge_name: response.challenge_name,
        })
    }

    async fn forgot_password(
        &self,
        input: ForgotPasswordInput,
    ) -> Result<ForgotPasswordOutput, IdentityProviderError> {
        let request = wire::ForgotPasswordRequest {
            client_id: input.client_id.as_str(),
            username: &input.username,
        };

        let response: wire::ForgotPasswordResponse = self.call("ForgotPassword", &request).await?;

        Ok(ForgotPasswordOutput {
            code_delivery_details: response.code_delivery_details.map(Into::into),
        })
    }

    async fn confirm_forgot_password(
        &self,
        input: ConfirmForgotPasswordInput,
    ) -> Result<(), IdentityProviderError> {
        let request = wire::ConfirmForgotPasswordRequest {
            client_id: input.client_id.as_str(),
            username: &input.username,
            confirmation_code: input.confirmation_code.expose_secret(),
            password: input.password.expose_secret(),
        };

        let _: wire::EmptyResponse = self.call("ConfirmForgotPassword", &request).await?;
        Ok(())
    }

    async fn change_password(
        &self,
        input: ChangePasswordInput,
    ) -> Result<(), IdentityProviderError> {
        let request = wire::ChangePasswordRequest {
            access_token: input.access_token.as_ref().expose_secret(),
            previous_password: input.previous_password.expose_secret(),
            proposed_password: input.proposed_password.expose_secret(),
        };

        let _: wire::EmptyResponse = self.call("ChangePassword", &request).await?;
        Ok(())
    }

    async fn get_user(&self, input: GetUserInput) -> Result<GetUserOutput, IdentityProviderError> {
        let request = wire::AccessTokenRequest {
            access_token: input.access_token.as_ref().expose_secret(),
        };

        let response: wire::GetUserResponse = self.call("GetUser", &request).await?;

        Ok(GetUserOutput {
            username: response.username,
            user_attributes: response
                .user_attributes
                .into_iter()
                .map(Into::into)
                .collect(),
            preferred_mfa_setting: response.preferred_mfa_setting,
        })
    }

    async fn global_sign_out(
        &self,
        input: GlobalSignOutInput,
    ) -> Result<(), IdentityProviderError> {
        let request = wire::AccessTokenRequest {
            access_token: input.access_token.as_ref().expose_secret(),
        };

        let _: wire::EmptyResponse = self.call("GlobalSignOut", &request).await?;
        Ok(())
    }
}
