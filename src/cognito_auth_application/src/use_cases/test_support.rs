//! Scriptable identity provider used by the use case tests.

use std::{
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use cognito_auth_core::{
    AccessToken, AuthFlow, AuthenticationResult, ChangePasswordInput, CodeDeliveryDetails,
    ConfirmForgotPasswordInput, ConfirmSignUpInput, ForgotPasswordInput, ForgotPasswordOutput,
    GetUserInput, GetUserOutput, GlobalSignOutInput, IdentityProvider, IdentityProviderError,
    InitiateAuthInput, InitiateAuthOutput, SignUpInput, SignUpOutput, UserAttribute,
};
use secrecy::ExposeSecret;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub const USER_SUB: &str = "7d8a3c2e-1f4b-4e6a-9c0d-2b5e8f1a3c7d";

enum Script {
    Succeed,
    Reject(&'static str, &'static str),
    Transport,
}

/// What the stub saw for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub client_id: Option<String>,
    pub username: Option<String>,
    pub access_token: Option<String>,
    pub fields: Vec<(String, String)>,
}

pub struct StubProvider {
    script: Script,
    delivery: Option<CodeDeliveryDetails>,
    user_attributes: Vec<UserAttribute>,
    preferred_mfa_setting: Option<String>,
    challenge: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn succeeding() -> Self {
        Self {
            script: Script::Succeed,
            delivery: Some(CodeDeliveryDetails {
                destination: "j***@e***".to_string(),
                delivery_medium: "EMAIL".to_string(),
            }),
            user_attributes: vec![
                UserAttribute::new("sub", USER_SUB),
                UserAttribute::new("email", "jdoe@example.com"),
            ],
            preferred_mfa_setting: None,
            challenge: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(code: &'static str, message: &'static str) -> Self {
        Self {
            script: Script::Reject(code, message),
            ..Self::succeeding()
        }
    }

    pub fn failing_transport() -> Self {
        Self {
            script: Script::Transport,
            ..Self::succeeding()
        }
    }

    pub fn with_delivery(mut self, delivery: Option<CodeDeliveryDetails>) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_user_attributes(mut self, attributes: Vec<UserAttribute>) -> Self {
        self.user_attributes = attributes;
        self
    }

    pub fn with_preferred_mfa_setting(mut self, setting: &str) -> Self {
        self.preferred_mfa_setting = Some(setting.to_string());
        self
    }

    pub fn with_challenge(mut self, challenge: &str) -> Self {
        self.challenge = Some(challenge.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), IdentityProviderError> {
        let token_missing = call.access_token.as_deref() == Some("");
        self.calls.lock().unwrap().push(call);

        if token_missing {
            return Err(IdentityProviderError::rejected(
                "NotAuthorizedException",
                "Invalid Access Token",
            ));
        }

        match self.script {
            Script::Succeed => Ok(()),
            Script::Reject(code, message) => Err(IdentityProviderError::rejected(code, message)),
            Script::Transport => Err(IdentityProviderError::Transport(
                "connection reset by peer".to_string(),
            )),
        }
    }
}

fn exposed(token: &AccessToken) -> Option<String> {
    Some(token.as_ref().expose_secret().clone())
}

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn sign_up(&self, input: SignUpInput) -> Result<SignUpOutput, IdentityProviderError> {
        let mut fields = vec![(
            "password".to_string(),
            input.password.expose_secret().clone(),
        )];
        fields.extend(
            input
                .user_attributes
                .iter()
                .map(|attribute| (attribute.name.clone(), attribute.value.clone())),
        );
        self.record(RecordedCall {
            operation: "SignUp",
            client_id: Some(input.client_id.to_string()),
            username: Some(input.username),
            fields,
            ..Default::default()
        })?;

        Ok(SignUpOutput {
            user_sub: USER_SUB.to_string(),
            code_delivery_details: self.delivery.clone(),
        })
    }

    async fn confirm_sign_up(
        &self,
        input: ConfirmSignUpInput,
    ) -> Result<(), IdentityProviderError> {
        self.record(RecordedCall {
            operation: "ConfirmSignUp",
            client_id: Some(input.client_id.to_string()),
            username: Some(input.username),
            fields: vec![(
                "confirmation_code".to_string(),
                input.confirmation_code.expose_secret().clone(),
            )],
            ..Default::default()
        })
    }

    async fn initiate_auth(
        &self,
        input: InitiateAuthInput,
    ) -> Result<InitiateAuthOutput, IdentityProviderError> {
        let flow = input.flow.name();
        let AuthFlow::UserPassword { username, password } = input.flow;
        self.record(RecordedCall {
            operation: "InitiateAuth",
            client_id: Some(input.client_id.to_string()),
            username: Some(username),
            fields: vec![
                ("flow".to_string(), flow.to_string()),
                ("password".to_string(), password.expose_secret().clone()),
            ],
            ..Default::default()
        })?;

        if let Some(challenge) = &self.challenge {
            return Ok(InitiateAuthOutput {
                authentication_result: None,
                challenge_name: Some(challenge.clone()),
            });
        }

        Ok(InitiateAuthOutput {
            authentication_result: Some(AuthenticationResult {
                id_token: "id-token".to_string(),
                access_token: "access-token".to_string(),
                expires_in: 3600,
                refresh_token: "refresh-token".to_string(),
            }),
            challenge_name: None,
        })
    }

    async fn forgot_password(
        &self,
        input: ForgotPasswordInput,
    ) -> Result<ForgotPasswordOutput, IdentityProviderError> {
        self.record(RecordedCall {
            operation: "ForgotPassword",
            client_id: Some(input.client_id.to_string()),
            username: Some(input.username),
            ..Default::default()
        })?;

        Ok(ForgotPasswordOutput {
            code_delivery_details: self.delivery.clone(),
        })
    }

    async fn confirm_forgot_password(
        &self,
        input: ConfirmForgotPasswordInput,
    ) -> Result<(), IdentityProviderError> {
        self.record(RecordedCall {
            operation: "ConfirmForgotPassword",
            client_id: Some(input.client_id.to_string()),
            username: Some(input.username),
            fields: vec![
                (
                    "confirmation_code".to_string(),
                    input.confirmation_code.expose_secret().clone(),
                ),
                ("password".to_string(), input.password.expose_secret().clone()),
            ],
            ..Default::default()
        })
    }

    async fn change_password(
        &self,
        input: ChangePasswordInput,
    ) -> Result<(), IdentityProviderError> {
        self.record(RecordedCall {
            operation: "ChangePassword",
            access_token: exposed(&input.access_token),
            fields: vec![
                (
                    "previous_password".to_string(),
                    input.previous_password.expose_secret().clone(),
                ),
                (
                    "proposed_password".to_string(),
                    input.proposed_password.expose_secret().clone(),
                ),
            ],
            ..Default::default()
        })
    }

    async fn get_user(&self, input: GetUserInput) -> Result<GetUserOutput, IdentityProviderError> {
        self.record(RecordedCall {
            operation: "GetUser",
            access_token: exposed(&input.access_token),
            ..Default::default()
        })?;

        Ok(GetUserOutput {
            username: "jdoe".to_string(),
            user_attributes: self.user_attributes.clone(),
            preferred_mfa_setting: self.preferred_mfa_setting.clone(),
        })
    }

    async fn global_sign_out(
        &self,
        input: GlobalSignOutInput,
    ) -> Result<(), IdentityProviderError> {
        self.record(RecordedCall {
            operation: "GlobalSignOut",
            access_token: exposed(&input.access_token),
            ..Default::default()
        })
    }
}

/// Log output of the current thread, captured while the guard lives.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
