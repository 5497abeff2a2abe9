use async_trait::async_trait;
use cognito_auth_core::{AccessToken, AuthValidator};
use http::{HeaderMap, header::AUTHORIZATION};
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Requires an `Authorization: Bearer <token>` header and hands the token on
/// untouched. Signature and expiry are left to the identity provider, which
/// rejects stale tokens when the route forwards them.
#[derive(Debug, Clone, Default)]
pub struct BearerTokenValidator;

impl BearerTokenValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthValidator for BearerTokenValidator {
    type Claims = AccessToken;
    type RequestParts = http::request::Parts;
    type Error = TokenAuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Err(TokenAuthError::MissingToken);
        }

        extract_bearer_token(&parts.headers).ok_or(TokenAuthError::MalformedHeader)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenAuthError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Malformed authorization header")]
    MalformedHeader,
}

/// Token from an `Authorization: Bearer <token>` header, if there is a
/// non-empty one.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    if token.is_empty() {
        None
    } else {
        Some(AccessToken::new(token))
    }
}
